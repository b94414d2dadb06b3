/// Liouville system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that overrides the tracing filter.
pub const LOG_ENV_VAR: &str = "LIOUVILLE_LOG";

/// Environment variable that overrides `observability.log_level`.
pub const LOG_LEVEL_ENV_VAR: &str = "LIOUVILLE_LOG_LEVEL";

/// Log levels accepted by `observability.log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
