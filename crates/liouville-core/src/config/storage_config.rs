use serde::{Deserialize, Serialize};

use crate::grid::GridShape;

/// Pathway store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// `[rows, cols]` every saved grid must have. When unset, the first
    /// saved grid fixes the shape.
    pub expected_shape: Option<[usize; 2]>,
}

impl StorageConfig {
    pub fn shape(&self) -> Option<GridShape> {
        self.expected_shape.map(GridShape::from)
    }
}
