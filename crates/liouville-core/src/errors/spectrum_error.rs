use super::error_code::{self, SpectrumErrorCode};
use super::ConfigError;
use crate::grid::GridShape;
use crate::pathway::{PathwayType, Tag};
use crate::selection::Selection;

/// Root error type for every spectrum operation.
///
/// No variant leaves the store partially mutated.
#[derive(Debug, thiserror::Error)]
pub enum SpectrumError {
    /// Label does not name a pathway type, or the type has no category mapping.
    #[error("unknown pathway type: {label}")]
    UnknownPathwayType { label: String },

    #[error("entry {pathway}[{tag}] already stored")]
    DuplicateEntry { pathway: PathwayType, tag: Tag },

    #[error("entry {pathway}[{tag}] not found")]
    NotFound { pathway: PathwayType, tag: Tag },

    /// The aggregation filter matched no stored entry.
    #[error("no stored pathways match {selection}")]
    EmptyAggregate { selection: Selection },

    #[error("grid shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: GridShape, found: GridShape },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SpectrumError {
    pub(crate) fn unknown(pathway: PathwayType) -> Self {
        Self::UnknownPathwayType {
            label: pathway.label().to_string(),
        }
    }
}

impl SpectrumErrorCode for SpectrumError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPathwayType { .. } => error_code::UNKNOWN_PATHWAY_TYPE,
            Self::DuplicateEntry { .. } => error_code::DUPLICATE_ENTRY,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::EmptyAggregate { .. } => error_code::EMPTY_AGGREGATE,
            Self::ShapeMismatch { .. } => error_code::SHAPE_MISMATCH,
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type SpectrumResult<T> = Result<T, SpectrumError>;
