//! Shared grid builders for the workspace test suites and benches.

use liouville_core::{Grid, PathwayType};
use ndarray::Array2;

/// Grid filled with a single value.
pub fn constant_grid(rows: usize, cols: usize, value: f64) -> Grid {
    Array2::from_elem((rows, cols), value)
}

/// Grid whose element `(i, j)` is `offset + i * cols + j`.
///
/// Values are small integers, so sums of a handful of ramps are exact in f64.
pub fn ramp_grid(rows: usize, cols: usize, offset: f64) -> Grid {
    Array2::from_shape_fn((rows, cols), |(i, j)| offset + (i * cols + j) as f64)
}

/// A distinct, exactly representable grid per pathway type and seed.
pub fn pathway_grid(pathway: PathwayType, seed: u32, rows: usize, cols: usize) -> Grid {
    let index = PathwayType::ALL
        .iter()
        .position(|ty| *ty == pathway)
        .unwrap_or(0);
    ramp_grid(rows, cols, (index as f64 + 1.0) * 100.0 + f64::from(seed))
}

/// Elementwise sum of `grids`, computed independently of the aggregator.
pub fn reference_sum<'a>(grids: impl IntoIterator<Item = &'a Grid>) -> Option<Grid> {
    let mut iter = grids.into_iter();
    let mut acc = iter.next()?.clone();
    for grid in iter {
        acc = acc + grid;
    }
    Some(acc)
}
