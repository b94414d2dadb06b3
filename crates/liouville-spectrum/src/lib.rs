//! # liouville-spectrum
//!
//! Public entry point: [`TwoDSpectrum`] stores Liouville pathway
//! contributions to a two-dimensional spectrum and serves sums over pathway
//! types, processes, signal classes, and the total.

mod spectrum;
mod summary;
pub mod tracing_setup;

pub use spectrum::TwoDSpectrum;
pub use summary::SpectrumSummary;

pub use liouville_core::{
    Grid, GridElement, GridShape, PathwayType, Process, Selection, SignalClass,
    SpectrumConfig, SpectrumError, SpectrumResult, Tag,
};
