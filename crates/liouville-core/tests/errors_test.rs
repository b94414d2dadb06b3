use liouville_core::errors::*;
use liouville_core::{GridShape, PathwayType, Process, Selection, Tag};

#[test]
fn duplicate_entry_carries_key() {
    let err = SpectrumError::DuplicateEntry {
        pathway: PathwayType::R2g,
        tag: Tag::from("t1"),
    };
    let msg = err.to_string();
    assert!(msg.contains("R2g"));
    assert!(msg.contains("t1"));
    assert_eq!(err.error_code(), "DUPLICATE_ENTRY");
}

#[test]
fn not_found_carries_key() {
    let err = SpectrumError::NotFound {
        pathway: PathwayType::R4g,
        tag: Tag::from(3),
    };
    assert!(err.to_string().contains("R4g[3]"));
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[test]
fn empty_aggregate_names_selection() {
    let err = SpectrumError::EmptyAggregate {
        selection: Selection::Process(Process::Esa),
    };
    assert!(err.to_string().contains("process ESA"));
    assert_eq!(err.error_code(), "EMPTY_AGGREGATE");
}

#[test]
fn shape_mismatch_carries_both_shapes() {
    let err = SpectrumError::ShapeMismatch {
        expected: GridShape::new(4, 4),
        found: GridShape::new(4, 5),
    };
    let msg = err.to_string();
    assert!(msg.contains("4x4"));
    assert!(msg.contains("4x5"));
    assert_eq!(err.error_code(), "SHAPE_MISMATCH");
}

// --- From impls ---

#[test]
fn config_error_converts_to_spectrum_error() {
    let config_err = ConfigError::ValidationFailed {
        field: "aggregation.parallel_min_elements".into(),
        message: "must be greater than 0".into(),
    };
    let err: SpectrumError = config_err.into();
    assert!(matches!(err, SpectrumError::Config(_)));
    assert!(err.to_string().contains("parallel_min_elements"));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
