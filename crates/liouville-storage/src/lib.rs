//! # liouville-storage
//!
//! Append-only keyed store of pathway contributions. Owns every stored grid
//! and enforces the one-entry-per-key and one-shape-per-store invariants.

mod store;

pub use store::PathwayStore;
