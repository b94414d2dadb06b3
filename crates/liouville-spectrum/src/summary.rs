use std::collections::BTreeMap;

use liouville_core::{GridShape, PathwayType, Process, SignalClass};
use serde::{Deserialize, Serialize};

/// Contribution counts of a spectrum, grouped the ways it can be aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumSummary {
    pub entries: usize,
    pub shape: Option<GridShape>,
    pub by_type: BTreeMap<PathwayType, usize>,
    pub by_process: BTreeMap<Process, usize>,
    pub by_signal: BTreeMap<SignalClass, usize>,
    /// Entries whose pathway type has no process or signal mapping.
    pub unclassified: usize,
}
