//! Aggregation filters over stored pathway types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pathway::{PathwayType, Process, SignalClass};
use crate::taxonomy::CategoryTaxonomy;

/// Which stored pathways an aggregate sums over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum Selection {
    /// Every tag of one pathway type.
    Type(PathwayType),
    /// Every pathway type mapped to a process.
    Process(Process),
    /// Every pathway type mapped to a signal class.
    Signal(SignalClass),
    /// Every stored entry.
    Total,
}

impl Selection {
    /// Whether entries of `pathway` belong to this selection.
    /// Pathways without a taxonomy mapping only match `Type` and `Total`.
    pub fn matches(&self, taxonomy: &CategoryTaxonomy, pathway: PathwayType) -> bool {
        match self {
            Self::Type(ty) => *ty == pathway,
            Self::Process(process) => taxonomy
                .classify(pathway)
                .is_some_and(|(p, _)| p == *process),
            Self::Signal(signal) => taxonomy
                .classify(pathway)
                .is_some_and(|(_, s)| s == *signal),
            Self::Total => true,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => write!(f, "type {ty}"),
            Self::Process(p) => write!(f, "process {p}"),
            Self::Signal(s) => write!(f, "signal {s}"),
            Self::Total => f.write_str("total"),
        }
    }
}

impl From<PathwayType> for Selection {
    fn from(value: PathwayType) -> Self {
        Self::Type(value)
    }
}

impl From<Process> for Selection {
    fn from(value: Process) -> Self {
        Self::Process(value)
    }
}

impl From<SignalClass> for Selection {
    fn from(value: SignalClass) -> Self {
        Self::Signal(value)
    }
}
