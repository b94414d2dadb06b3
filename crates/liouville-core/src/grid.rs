//! Grid representation shared by every spectrum.

use std::fmt;
use std::ops::AddAssign;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Dense two-dimensional spectral grid.
pub type Grid<A = f64> = Array2<A>;

/// Element type a grid may hold. Implemented for every value that can be
/// summed in place and shared across threads, which covers real floats and
/// complex numbers alike.
pub trait GridElement: Clone + AddAssign + PartialEq + fmt::Debug + Send + Sync + 'static {}

impl<T> GridElement for T where T: Clone + AddAssign + PartialEq + fmt::Debug + Send + Sync + 'static {}

/// `(rows, cols)` shape of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub fn of<A>(grid: &Grid<A>) -> Self {
        let (rows, cols) = grid.dim();
        Self { rows, cols }
    }

    /// Number of elements a grid of this shape holds.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<[usize; 2]> for GridShape {
    fn from([rows, cols]: [usize; 2]) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
