//! Top-level spectrum configuration.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AggregationConfig, ObservabilityConfig, StorageConfig};
use crate::constants::{LOG_LEVELS, LOG_LEVEL_ENV_VAR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LIOUVILLE_*`)
/// 2. Config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrumConfig {
    pub storage: StorageConfig,
    pub aggregation: AggregationConfig,
    pub observability: ObservabilityConfig,
}

impl SpectrumConfig {
    /// Load a config file, apply environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        let mut config: SpectrumConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SpectrumConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `LIOUVILLE_LOG_LEVEL` if set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV_VAR) {
            if !level.trim().is_empty() {
                self.observability.log_level = level.trim().to_lowercase();
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some([rows, cols]) = self.storage.expected_shape {
            if rows == 0 || cols == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.expected_shape".to_string(),
                    message: "dimensions must be greater than 0".to_string(),
                });
            }
        }
        if self.aggregation.parallel_min_elements == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "aggregation.parallel_min_elements".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
