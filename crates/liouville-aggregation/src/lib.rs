//! # liouville-aggregation
//!
//! Computes aggregate spectra over any `PathwaySource`: per pathway type,
//! per process, per signal class, or the total.

mod aggregator;
mod summation;

pub use aggregator::Aggregator;
pub use summation::sum_grids;
