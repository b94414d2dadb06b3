//! PathwayStore: ordered map keyed by `(type, tag)`, shape-checked on insert.

use std::collections::{BTreeMap, BTreeSet};

use liouville_core::traits::EntryIter;
use liouville_core::{
    Grid, GridElement, GridShape, PathwayEntry, PathwayKey, PathwaySource, PathwayType,
    SpectrumError, SpectrumResult, Tag,
};
use tracing::{debug, warn};

/// Append-only store of pathway contributions.
///
/// Holds at most one grid per `(type, tag)` and every grid shares one shape.
/// The shape is either pinned at construction or taken from the first grid
/// stored. Failed inserts leave the store untouched.
#[derive(Debug, Clone)]
pub struct PathwayStore<A = f64> {
    entries: BTreeMap<PathwayKey, Grid<A>>,
    shape: Option<GridShape>,
}

impl<A: GridElement> PathwayStore<A> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            shape: None,
        }
    }

    /// A store that only accepts grids of `shape`.
    pub fn with_shape(shape: GridShape) -> Self {
        Self {
            entries: BTreeMap::new(),
            shape: Some(shape),
        }
    }

    /// Insert a contribution. Rejects an occupied key with `DuplicateEntry`
    /// and a grid of the wrong shape with `ShapeMismatch`.
    pub fn add(
        &mut self,
        pathway: PathwayType,
        tag: impl Into<Tag>,
        grid: Grid<A>,
    ) -> SpectrumResult<()> {
        let key = PathwayKey::new(pathway, tag);
        if self.entries.contains_key(&key) {
            warn!(%key, "rejected duplicate pathway entry");
            return Err(SpectrumError::DuplicateEntry {
                pathway,
                tag: key.tag,
            });
        }

        let found = GridShape::of(&grid);
        if let Some(expected) = self.shape {
            if expected != found {
                warn!(%key, %expected, %found, "rejected pathway entry with wrong shape");
                return Err(SpectrumError::ShapeMismatch { expected, found });
            }
        }

        debug!(%key, shape = %found, "stored pathway entry");
        self.shape = Some(found);
        self.entries.insert(key, grid);
        Ok(())
    }

    /// The stored grid for `(pathway, tag)`.
    pub fn get(&self, pathway: PathwayType, tag: impl Into<Tag>) -> SpectrumResult<&Grid<A>> {
        let key = PathwayKey::new(pathway, tag);
        match self.entries.get(&key) {
            Some(grid) => Ok(grid),
            None => Err(SpectrumError::NotFound {
                pathway,
                tag: key.tag,
            }),
        }
    }

    pub fn contains(&self, pathway: PathwayType, tag: impl Into<Tag>) -> bool {
        self.entries.contains_key(&PathwayKey::new(pathway, tag))
    }

    /// Tags stored under `pathway`, in tag order. Empty if none.
    pub fn tags_for(&self, pathway: PathwayType) -> Vec<Tag> {
        self.entries_of_type(pathway)
            .map(|(tag, _)| tag.clone())
            .collect()
    }

    /// Lazily yields `(tag, grid)` for every entry of `pathway`.
    pub fn entries_of_type(
        &self,
        pathway: PathwayType,
    ) -> impl Iterator<Item = (&Tag, &Grid<A>)> + '_ {
        self.range_of(pathway).map(|(key, grid)| (&key.tag, grid))
    }

    /// Lazily yields every stored entry in key order.
    pub fn all_entries(&self) -> impl Iterator<Item = (&PathwayKey, &Grid<A>)> + '_ {
        self.entries.iter()
    }

    /// Consume the store into owned entries, in key order.
    pub fn into_entries(self) -> impl Iterator<Item = PathwayEntry<A>> {
        self.entries
            .into_iter()
            .map(|(key, grid)| PathwayEntry { key, grid })
    }

    /// Pathway types with at least one stored entry.
    pub fn pathway_types(&self) -> BTreeSet<PathwayType> {
        self.entries.keys().map(|key| key.pathway).collect()
    }

    /// Number of stored entries per pathway type.
    pub fn census(&self) -> BTreeMap<PathwayType, usize> {
        let mut counts = BTreeMap::new();
        for key in self.entries.keys() {
            *counts.entry(key.pathway).or_insert(0) += 1;
        }
        counts
    }

    pub fn shape(&self) -> Option<GridShape> {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn range_of(
        &self,
        pathway: PathwayType,
    ) -> impl Iterator<Item = (&PathwayKey, &Grid<A>)> + '_ {
        self.entries
            .range(PathwayKey::first_of(pathway)..)
            .take_while(move |(key, _)| key.pathway == pathway)
    }
}

impl<A: GridElement> Default for PathwayStore<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: GridElement> PathwaySource<A> for PathwayStore<A> {
    fn shape(&self) -> Option<GridShape> {
        self.shape
    }

    fn entries(&self) -> EntryIter<'_, A> {
        Box::new(self.entries.iter())
    }

    fn entries_for(&self, pathway: PathwayType) -> EntryIter<'_, A> {
        Box::new(self.range_of(pathway))
    }
}
