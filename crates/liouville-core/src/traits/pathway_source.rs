use crate::grid::{Grid, GridElement, GridShape};
use crate::pathway::{PathwayKey, PathwayType};

/// Boxed iterator over stored `(key, grid)` pairs.
pub type EntryIter<'a, A> = Box<dyn Iterator<Item = (&'a PathwayKey, &'a Grid<A>)> + 'a>;

/// Read-only view of stored pathway contributions, consumed by aggregation.
pub trait PathwaySource<A: GridElement> {
    /// Shape every stored grid is expected to share, if established.
    fn shape(&self) -> Option<GridShape>;

    /// Every stored entry, in key order.
    fn entries(&self) -> EntryIter<'_, A>;

    /// Entries of a single pathway type, in tag order.
    fn entries_for(&self, pathway: PathwayType) -> EntryIter<'_, A> {
        Box::new(self.entries().filter(move |(key, _)| key.pathway == pathway))
    }
}
