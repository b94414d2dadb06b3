//! # liouville-core
//!
//! Foundation crate for the Liouville pathway store.
//! Defines the pathway vocabularies, the category taxonomy, the grid
//! representation, errors, config, and the storage/aggregation seam.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod grid;
pub mod pathway;
pub mod selection;
pub mod taxonomy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SpectrumConfig;
pub use errors::{SpectrumError, SpectrumResult};
pub use grid::{Grid, GridElement, GridShape};
pub use pathway::{PathwayEntry, PathwayKey, PathwayType, Process, SignalClass, Tag};
pub use selection::Selection;
pub use taxonomy::CategoryTaxonomy;
pub use traits::PathwaySource;
