use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PathwayType, Tag};
use crate::grid::Grid;

/// Composite `(type, tag)` key. Orders by pathway type, then tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathwayKey {
    pub pathway: PathwayType,
    pub tag: Tag,
}

impl PathwayKey {
    pub fn new(pathway: PathwayType, tag: impl Into<Tag>) -> Self {
        Self {
            pathway,
            tag: tag.into(),
        }
    }

    /// The smallest key of the given pathway type.
    pub fn first_of(pathway: PathwayType) -> Self {
        Self {
            pathway,
            tag: Tag::MIN,
        }
    }
}

impl fmt::Display for PathwayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.pathway, self.tag)
    }
}

/// A single stored pathway contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct PathwayEntry<A> {
    pub key: PathwayKey,
    pub grid: Grid<A>,
}
