//! CategoryTaxonomy: fixed mapping from pathway type to process and
//! signal class.
//!
//! | Type | Process | Signal |
//! |------|---------|--------|
//! | R1g  | SE      | NONR   |
//! | R2g  | SE      | REPH   |
//! | R3g  | GSB     | REPH   |
//! | R4g  | GSB     | NONR   |
//! | R1fs | ESA     | REPH   |
//! | R2fs | ESA     | NONR   |
//!
//! R3fs and R4fs are double-coherence pathways and carry no mapping.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;

use crate::errors::{SpectrumError, SpectrumResult};
use crate::pathway::{PathwayType, Process, SignalClass};

static STANDARD: Lazy<CategoryTaxonomy> = Lazy::new(CategoryTaxonomy::build);

/// Immutable pathway → (process, signal) lookup table with reverse indexes.
#[derive(Debug)]
pub struct CategoryTaxonomy {
    mapping: BTreeMap<PathwayType, (Process, SignalClass)>,
    by_process: BTreeMap<Process, BTreeSet<PathwayType>>,
    by_signal: BTreeMap<SignalClass, BTreeSet<PathwayType>>,
}

impl CategoryTaxonomy {
    /// The process-wide table. Built on first use, never mutated.
    pub fn standard() -> &'static CategoryTaxonomy {
        Lazy::force(&STANDARD)
    }

    fn build() -> Self {
        let mut mapping = BTreeMap::new();
        let mut by_process: BTreeMap<Process, BTreeSet<PathwayType>> =
            Process::ALL.into_iter().map(|p| (p, BTreeSet::new())).collect();
        let mut by_signal: BTreeMap<SignalClass, BTreeSet<PathwayType>> =
            SignalClass::ALL.into_iter().map(|s| (s, BTreeSet::new())).collect();

        for pathway in PathwayType::ALL {
            if let Some((process, signal)) = Self::category_of(pathway) {
                mapping.insert(pathway, (process, signal));
                by_process.entry(process).or_default().insert(pathway);
                by_signal.entry(signal).or_default().insert(pathway);
            }
        }

        Self {
            mapping,
            by_process,
            by_signal,
        }
    }

    fn category_of(pathway: PathwayType) -> Option<(Process, SignalClass)> {
        match pathway {
            PathwayType::R1g => Some((Process::Se, SignalClass::Nonr)),
            PathwayType::R2g => Some((Process::Se, SignalClass::Reph)),
            PathwayType::R3g => Some((Process::Gsb, SignalClass::Reph)),
            PathwayType::R4g => Some((Process::Gsb, SignalClass::Nonr)),
            PathwayType::R1fs => Some((Process::Esa, SignalClass::Reph)),
            PathwayType::R2fs => Some((Process::Esa, SignalClass::Nonr)),
            PathwayType::R3fs | PathwayType::R4fs => None,
        }
    }

    /// `(process, signal)` of a pathway, or `None` if it has no mapping.
    pub fn classify(&self, pathway: PathwayType) -> Option<(Process, SignalClass)> {
        self.mapping.get(&pathway).copied()
    }

    pub fn is_classified(&self, pathway: PathwayType) -> bool {
        self.mapping.contains_key(&pathway)
    }

    pub fn process_of(&self, pathway: PathwayType) -> SpectrumResult<Process> {
        self.classify(pathway)
            .map(|(process, _)| process)
            .ok_or_else(|| SpectrumError::unknown(pathway))
    }

    pub fn signal_of(&self, pathway: PathwayType) -> SpectrumResult<SignalClass> {
        self.classify(pathway)
            .map(|(_, signal)| signal)
            .ok_or_else(|| SpectrumError::unknown(pathway))
    }

    /// Pathway types mapped to `process`, in type order.
    pub fn types_in_process(&self, process: Process) -> &BTreeSet<PathwayType> {
        // Every process is seeded in `build`.
        &self.by_process[&process]
    }

    /// Pathway types mapped to `signal`, in type order.
    pub fn types_in_signal(&self, signal: SignalClass) -> &BTreeSet<PathwayType> {
        &self.by_signal[&signal]
    }
}
