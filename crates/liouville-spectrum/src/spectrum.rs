//! TwoDSpectrum: composes one PathwayStore with one Aggregator.

use std::collections::BTreeSet;

use liouville_aggregation::Aggregator;
use liouville_core::{
    Grid, GridElement, GridShape, PathwayType, Process, Selection, SignalClass, SpectrumConfig,
    SpectrumResult, Tag,
};
use liouville_storage::PathwayStore;

use crate::summary::SpectrumSummary;

/// A two-dimensional spectrum resolved into Liouville pathway contributions.
///
/// Populate with [`save`](Self::save), then read single contributions with
/// [`get`](Self::get) or freshly computed sums with the `get_by_*` family.
/// Saving needs `&mut self` and every read takes `&self`, so a populated
/// spectrum can be shared read-only across threads.
#[derive(Debug, Clone)]
pub struct TwoDSpectrum<A = f64> {
    store: PathwayStore<A>,
    aggregator: Aggregator,
}

impl<A: GridElement> TwoDSpectrum<A> {
    pub fn new() -> Self {
        Self::with_config(&SpectrumConfig::default())
    }

    pub fn with_config(config: &SpectrumConfig) -> Self {
        let store = match config.storage.shape() {
            Some(shape) => PathwayStore::with_shape(shape),
            None => PathwayStore::new(),
        };
        Self {
            store,
            aggregator: Aggregator::new(config.aggregation.clone()),
        }
    }

    /// Store the contribution of one pathway.
    ///
    /// Fails with `DuplicateEntry` if `(pathway, tag)` is taken and with
    /// `ShapeMismatch` if `grid` differs from the spectrum's shape.
    pub fn save(
        &mut self,
        pathway: PathwayType,
        tag: impl Into<Tag>,
        grid: Grid<A>,
    ) -> SpectrumResult<()> {
        self.store.add(pathway, tag, grid)
    }

    /// The stored grid of one contribution.
    pub fn get(&self, pathway: PathwayType, tag: impl Into<Tag>) -> SpectrumResult<&Grid<A>> {
        self.store.get(pathway, tag)
    }

    /// Sum of every tag saved under `pathway`.
    pub fn get_by_type(&self, pathway: PathwayType) -> SpectrumResult<Grid<A>> {
        self.aggregator.sum_by_type(&self.store, pathway)
    }

    /// Sum of every pathway mapped to `process`.
    pub fn get_by_process(&self, process: Process) -> SpectrumResult<Grid<A>> {
        self.aggregator.sum_by_process(&self.store, process)
    }

    /// Sum of every pathway mapped to `signal`.
    pub fn get_by_signal(&self, signal: SignalClass) -> SpectrumResult<Grid<A>> {
        self.aggregator.sum_by_signal(&self.store, signal)
    }

    /// Sum of every saved contribution.
    pub fn get_total(&self) -> SpectrumResult<Grid<A>> {
        self.aggregator.sum_total(&self.store)
    }

    pub fn aggregate(&self, selection: Selection) -> SpectrumResult<Grid<A>> {
        self.aggregator.aggregate(&self.store, selection)
    }

    pub fn tags_for(&self, pathway: PathwayType) -> Vec<Tag> {
        self.store.tags_for(pathway)
    }

    pub fn pathway_types(&self) -> BTreeSet<PathwayType> {
        self.store.pathway_types()
    }

    pub fn contains(&self, pathway: PathwayType, tag: impl Into<Tag>) -> bool {
        self.store.contains(pathway, tag)
    }

    pub fn shape(&self) -> Option<GridShape> {
        self.store.shape()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Read access to the underlying store, e.g. for export.
    pub fn store(&self) -> &PathwayStore<A> {
        &self.store
    }

    pub fn into_store(self) -> PathwayStore<A> {
        self.store
    }

    pub fn summary(&self) -> SpectrumSummary {
        let taxonomy = self.aggregator.taxonomy();
        let by_type = self.store.census();
        let count = |selection: Selection| -> usize {
            by_type
                .iter()
                .filter(|(ty, _)| selection.matches(taxonomy, **ty))
                .map(|(_, n)| *n)
                .sum()
        };

        let by_process = Process::ALL
            .into_iter()
            .map(|p| (p, count(Selection::Process(p))))
            .collect();
        let by_signal = SignalClass::ALL
            .into_iter()
            .map(|s| (s, count(Selection::Signal(s))))
            .collect();
        let unclassified = by_type
            .iter()
            .filter(|(ty, _)| !taxonomy.is_classified(**ty))
            .map(|(_, n)| *n)
            .sum();

        SpectrumSummary {
            entries: self.store.len(),
            shape: self.store.shape(),
            by_type,
            by_process,
            by_signal,
            unclassified,
        }
    }
}

impl<A: GridElement> Default for TwoDSpectrum<A> {
    fn default() -> Self {
        Self::new()
    }
}
