//! Stable machine-readable error codes.

/// Implemented by every error enum so callers can branch on a code
/// instead of matching display text.
pub trait SpectrumErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const UNKNOWN_PATHWAY_TYPE: &str = "UNKNOWN_PATHWAY_TYPE";
pub const DUPLICATE_ENTRY: &str = "DUPLICATE_ENTRY";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const EMPTY_AGGREGATE: &str = "EMPTY_AGGREGATE";
pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
