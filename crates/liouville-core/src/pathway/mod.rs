//! Pathway vocabularies: diagram types, process and signal categories,
//! tags, and the composite store key.

mod category;
mod entry;
mod kind;
mod tag;

pub use category::{Process, SignalClass};
pub use entry::{PathwayEntry, PathwayKey};
pub use kind::PathwayType;
pub use tag::Tag;
