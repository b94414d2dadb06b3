//! Configuration system for Liouville.
//! TOML-based: environment > file > compiled defaults.

pub mod aggregation_config;
pub mod defaults;
pub mod observability_config;
pub mod spectrum_config;
pub mod storage_config;

pub use aggregation_config::AggregationConfig;
pub use observability_config::ObservabilityConfig;
pub use spectrum_config::SpectrumConfig;
pub use storage_config::StorageConfig;
