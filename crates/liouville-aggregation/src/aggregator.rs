//! Aggregator: selects stored entries by type, process, or signal class and
//! sums their grids.

use liouville_core::config::AggregationConfig;
use liouville_core::traits::EntryIter;
use liouville_core::{
    CategoryTaxonomy, Grid, GridElement, GridShape, PathwaySource, PathwayType, Process,
    Selection, SignalClass, SpectrumError, SpectrumResult,
};
use tracing::{debug, debug_span, warn};

use crate::summation::sum_grids;

/// Computes aggregate grids from a `PathwaySource`. Holds no grid state, so
/// one aggregator serves any number of sources.
#[derive(Debug, Clone)]
pub struct Aggregator {
    taxonomy: &'static CategoryTaxonomy,
    config: AggregationConfig,
}

impl Aggregator {
    pub fn new(config: AggregationConfig) -> Self {
        Self {
            taxonomy: CategoryTaxonomy::standard(),
            config,
        }
    }

    pub fn taxonomy(&self) -> &'static CategoryTaxonomy {
        self.taxonomy
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Sum every entry matched by `selection` into a new grid.
    ///
    /// Fails with `EmptyAggregate` when nothing matches and `ShapeMismatch`
    /// when the matched grids disagree in shape. The source is never modified.
    pub fn aggregate<A, S>(&self, source: &S, selection: Selection) -> SpectrumResult<Grid<A>>
    where
        A: GridElement,
        S: PathwaySource<A> + ?Sized,
    {
        let _span = debug_span!("liouville.aggregate", %selection).entered();

        let mut contributing = 0usize;
        let grids = self.select(source, selection).map(|(_, grid)| {
            contributing += 1;
            grid
        });

        let summed = match sum_grids(grids, self.config.parallel_min_elements) {
            Ok(summed) => summed,
            Err(e) => {
                warn!(error = %e, "aggregation aborted");
                return Err(e);
            }
        };

        match summed {
            Some(grid) => {
                debug!(
                    entries = contributing,
                    shape = %GridShape::of(&grid),
                    "aggregate computed"
                );
                Ok(grid)
            }
            None => {
                debug!("no stored pathways match selection");
                Err(SpectrumError::EmptyAggregate { selection })
            }
        }
    }

    pub fn sum_by_type<A, S>(&self, source: &S, pathway: PathwayType) -> SpectrumResult<Grid<A>>
    where
        A: GridElement,
        S: PathwaySource<A> + ?Sized,
    {
        self.aggregate(source, Selection::Type(pathway))
    }

    pub fn sum_by_process<A, S>(&self, source: &S, process: Process) -> SpectrumResult<Grid<A>>
    where
        A: GridElement,
        S: PathwaySource<A> + ?Sized,
    {
        self.aggregate(source, Selection::Process(process))
    }

    pub fn sum_by_signal<A, S>(&self, source: &S, signal: SignalClass) -> SpectrumResult<Grid<A>>
    where
        A: GridElement,
        S: PathwaySource<A> + ?Sized,
    {
        self.aggregate(source, Selection::Signal(signal))
    }

    pub fn sum_total<A, S>(&self, source: &S) -> SpectrumResult<Grid<A>>
    where
        A: GridElement,
        S: PathwaySource<A> + ?Sized,
    {
        self.aggregate(source, Selection::Total)
    }

    /// Matching entries in key order. Category selections walk the
    /// taxonomy's member types so unmapped pathways are never visited.
    fn select<'s, A, S>(&self, source: &'s S, selection: Selection) -> EntryIter<'s, A>
    where
        A: GridElement,
        S: PathwaySource<A> + ?Sized,
    {
        match selection {
            Selection::Type(pathway) => source.entries_for(pathway),
            Selection::Process(process) => Box::new(
                self.taxonomy
                    .types_in_process(process)
                    .iter()
                    .flat_map(move |ty| source.entries_for(*ty)),
            ),
            Selection::Signal(signal) => Box::new(
                self.taxonomy
                    .types_in_signal(signal)
                    .iter()
                    .flat_map(move |ty| source.entries_for(*ty)),
            ),
            Selection::Total => source.entries(),
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(AggregationConfig::default())
    }
}
