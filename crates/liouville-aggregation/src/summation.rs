//! Elementwise accumulation of grids.

use liouville_core::{Grid, GridElement, GridShape, SpectrumError, SpectrumResult};
use ndarray::Zip;

/// Sum `grids` into a freshly allocated grid.
///
/// Returns `Ok(None)` when `grids` is empty. Every grid must have the shape
/// of the first one. Additions happen in iteration order for every element;
/// grids with at least `parallel_min_elements` elements are split across
/// threads by element, which leaves each element's addition order unchanged.
pub fn sum_grids<'a, A, I>(
    grids: I,
    parallel_min_elements: usize,
) -> SpectrumResult<Option<Grid<A>>>
where
    A: GridElement,
    I: IntoIterator<Item = &'a Grid<A>>,
{
    let mut iter = grids.into_iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };

    let expected = GridShape::of(first);
    let parallel = expected.len() >= parallel_min_elements;
    let mut acc = first.clone();

    for grid in iter {
        let found = GridShape::of(grid);
        if found != expected {
            return Err(SpectrumError::ShapeMismatch { expected, found });
        }
        let zip = Zip::from(&mut acc).and(grid);
        if parallel {
            zip.par_for_each(|a, b| *a += b.clone());
        } else {
            zip.for_each(|a, b| *a += b.clone());
        }
    }

    Ok(Some(acc))
}
