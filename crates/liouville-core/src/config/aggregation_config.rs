use serde::{Deserialize, Serialize};

use super::defaults;

/// Aggregator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Grids with at least this many elements are summed with parallel
    /// elementwise addition.
    pub parallel_min_elements: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            parallel_min_elements: defaults::DEFAULT_PARALLEL_MIN_ELEMENTS,
        }
    }
}
