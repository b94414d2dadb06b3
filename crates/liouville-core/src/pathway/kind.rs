use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SpectrumError;

/// Liouville pathway diagram labels.
///
/// `g` pathways evolve in the ground-state manifold during the waiting time,
/// `fs` pathways (written R1f* etc. in the literature) reach the two-exciton
/// manifold.
///
/// `R3fs` and `R4fs` are double-coherence pathways with no process or signal
/// class: they are storable but only show up in per-type and total aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PathwayType {
    R1g,
    R2g,
    R3g,
    R4g,
    R1fs,
    R2fs,
    R3fs,
    R4fs,
}

impl PathwayType {
    /// Total number of pathway types.
    pub const COUNT: usize = 8;

    /// All variants for iteration.
    pub const ALL: [PathwayType; 8] = [
        Self::R1g,
        Self::R2g,
        Self::R3g,
        Self::R4g,
        Self::R1fs,
        Self::R2fs,
        Self::R3fs,
        Self::R4fs,
    ];

    /// Canonical text label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::R1g => "R1g",
            Self::R2g => "R2g",
            Self::R3g => "R3g",
            Self::R4g => "R4g",
            Self::R1fs => "R1fs",
            Self::R2fs => "R2fs",
            Self::R3fs => "R3fs",
            Self::R4fs => "R4fs",
        }
    }
}

impl fmt::Display for PathwayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PathwayType {
    type Err = SpectrumError;

    /// Accepts the canonical labels and the starred spelling (`R1f*`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = match trimmed.strip_suffix('*') {
            Some(stem) => format!("{stem}s"),
            None => trimmed.to_string(),
        };
        Self::ALL
            .into_iter()
            .find(|ty| ty.label() == normalized)
            .ok_or_else(|| SpectrumError::UnknownPathwayType {
                label: s.to_string(),
            })
    }
}
