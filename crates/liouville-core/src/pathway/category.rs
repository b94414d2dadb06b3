use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical process a pathway contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Process {
    /// Ground-state bleach.
    Gsb,
    /// Stimulated emission.
    Se,
    /// Excited-state absorption.
    Esa,
}

impl Process {
    pub const ALL: [Process; 3] = [Self::Gsb, Self::Se, Self::Esa];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Gsb => "GSB",
            Self::Se => "SE",
            Self::Esa => "ESA",
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rephasing or non-rephasing character of a pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalClass {
    Reph,
    Nonr,
}

impl SignalClass {
    pub const ALL: [SignalClass; 2] = [Self::Reph, Self::Nonr];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reph => "REPH",
            Self::Nonr => "NONR",
        }
    }
}

impl fmt::Display for SignalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
