use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier distinguishing contributions that share a pathway type.
///
/// Integer tags order before string tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Index(i64),
    Label(String),
}

impl Tag {
    /// Smallest tag in the ordering; lower bound for per-type range scans.
    pub const MIN: Tag = Tag::Index(i64::MIN);
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Tag {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<i32> for Tag {
    fn from(value: i32) -> Self {
        Self::Index(value.into())
    }
}

impl From<u32> for Tag {
    fn from(value: u32) -> Self {
        Self::Index(value.into())
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}
