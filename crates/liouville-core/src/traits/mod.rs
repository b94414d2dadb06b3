mod pathway_source;

pub use pathway_source::{EntryIter, PathwaySource};
