// Single source of truth for all default values.

// --- Aggregation ---
pub const DEFAULT_PARALLEL_MIN_ELEMENTS: usize = 65_536; // 256x256 grid

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
