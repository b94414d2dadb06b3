use liouville_aggregation::{sum_grids, Aggregator};
use liouville_core::config::AggregationConfig;
use liouville_core::{
    GridShape, PathwayType, Process, Selection, SignalClass, SpectrumError,
};
use liouville_storage::PathwayStore;
use ndarray::array;
use test_fixtures::{constant_grid, pathway_grid, reference_sum};

fn populated_store() -> PathwayStore {
    let mut store = PathwayStore::new();
    for ty in [
        PathwayType::R1g,
        PathwayType::R2g,
        PathwayType::R3g,
        PathwayType::R4g,
        PathwayType::R1fs,
        PathwayType::R2fs,
        PathwayType::R3fs,
    ] {
        store.add(ty, "a", pathway_grid(ty, 1, 3, 3)).unwrap();
        store.add(ty, "b", pathway_grid(ty, 2, 3, 3)).unwrap();
    }
    store
}

// ── Selection correctness ─────────────────────────────────────────────────

#[test]
fn sum_by_type_adds_every_tag() {
    let mut store = PathwayStore::new();
    let g1 = array![[1.0, 2.0], [3.0, 4.0]];
    let g2 = array![[10.0, 20.0], [30.0, 40.0]];
    store.add(PathwayType::R2g, "t1", g1).unwrap();
    store.add(PathwayType::R2g, "t2", g2).unwrap();
    store.add(PathwayType::R1g, "t1", array![[100.0, 100.0], [100.0, 100.0]]).unwrap();

    let summed = Aggregator::default()
        .sum_by_type(&store, PathwayType::R2g)
        .unwrap();
    assert_eq!(summed, array![[11.0, 22.0], [33.0, 44.0]]);
}

#[test]
fn sum_by_process_only_includes_member_types() {
    let store = populated_store();
    let aggregator = Aggregator::default();

    let se = aggregator.sum_by_process(&store, Process::Se).unwrap();
    let expected = reference_sum(
        store
            .all_entries()
            .filter(|(k, _)| matches!(k.pathway, PathwayType::R1g | PathwayType::R2g))
            .map(|(_, g)| g),
    )
    .unwrap();
    assert_eq!(se, expected);

    let esa = aggregator.sum_by_process(&store, Process::Esa).unwrap();
    let expected = reference_sum(
        store
            .all_entries()
            .filter(|(k, _)| matches!(k.pathway, PathwayType::R1fs | PathwayType::R2fs))
            .map(|(_, g)| g),
    )
    .unwrap();
    assert_eq!(esa, expected);
}

#[test]
fn sum_by_signal_only_includes_member_types() {
    let store = populated_store();
    let reph = Aggregator::default()
        .sum_by_signal(&store, SignalClass::Reph)
        .unwrap();
    let expected = reference_sum(
        store
            .all_entries()
            .filter(|(k, _)| {
                matches!(
                    k.pathway,
                    PathwayType::R2g | PathwayType::R3g | PathwayType::R1fs
                )
            })
            .map(|(_, g)| g),
    )
    .unwrap();
    assert_eq!(reph, expected);
}

#[test]
fn sum_total_includes_unmapped_pathways() {
    let store = populated_store();
    let total = Aggregator::default().sum_total(&store).unwrap();
    let expected = reference_sum(store.all_entries().map(|(_, g)| g)).unwrap();
    assert_eq!(total, expected);

    let classified = Aggregator::default()
        .sum_by_signal(&store, SignalClass::Reph)
        .unwrap()
        + &Aggregator::default()
            .sum_by_signal(&store, SignalClass::Nonr)
            .unwrap();
    assert_ne!(total, classified, "R3fs contributes to total only");
}

#[test]
fn aggregate_dispatches_on_selection() {
    let store = populated_store();
    let aggregator = Aggregator::default();
    assert_eq!(
        aggregator.aggregate(&store, Selection::Process(Process::Gsb)).unwrap(),
        aggregator.sum_by_process(&store, Process::Gsb).unwrap()
    );
    assert_eq!(
        aggregator.aggregate(&store, Selection::Total).unwrap(),
        aggregator.sum_total(&store).unwrap()
    );
}

// ── Empty selections ──────────────────────────────────────────────────────

#[test]
fn empty_type_is_an_error_not_a_zero_grid() {
    let store = populated_store();
    let err = Aggregator::default()
        .sum_by_type(&store, PathwayType::R4fs)
        .unwrap_err();
    assert!(matches!(
        err,
        SpectrumError::EmptyAggregate {
            selection: Selection::Type(PathwayType::R4fs)
        }
    ));
}

#[test]
fn empty_store_fails_every_aggregate() {
    let store: PathwayStore = PathwayStore::new();
    let aggregator = Aggregator::default();
    assert!(aggregator.sum_total(&store).is_err());
    assert!(aggregator.sum_by_process(&store, Process::Se).is_err());
    assert!(aggregator.sum_by_signal(&store, SignalClass::Nonr).is_err());
}

#[test]
fn process_with_only_unmapped_pathways_stored_is_empty() {
    let mut store = PathwayStore::new();
    store.add(PathwayType::R3fs, 1, constant_grid(2, 2, 1.0)).unwrap();
    store.add(PathwayType::R4fs, 1, constant_grid(2, 2, 1.0)).unwrap();
    for process in Process::ALL {
        assert!(matches!(
            Aggregator::default().sum_by_process(&store, process),
            Err(SpectrumError::EmptyAggregate { .. })
        ));
    }
    assert_eq!(
        Aggregator::default().sum_total(&store).unwrap(),
        constant_grid(2, 2, 2.0)
    );
}

// ── Result ownership and idempotence ──────────────────────────────────────

#[test]
fn result_is_independent_of_stored_grid() {
    let mut store = PathwayStore::new();
    store.add(PathwayType::R1g, 1, constant_grid(2, 2, 1.0)).unwrap();

    let mut summed = Aggregator::default()
        .sum_by_type(&store, PathwayType::R1g)
        .unwrap();
    summed.fill(42.0);

    assert_eq!(store.get(PathwayType::R1g, 1).unwrap(), &constant_grid(2, 2, 1.0));
}

#[test]
fn repeated_aggregation_is_bit_identical() {
    let mut store = PathwayStore::new();
    for (i, value) in [0.1, 0.2, 0.3, 1e-17, 7.7].into_iter().enumerate() {
        store
            .add(PathwayType::R2g, i as i64, constant_grid(4, 4, value))
            .unwrap();
    }
    let aggregator = Aggregator::default();
    let first = aggregator.sum_total(&store).unwrap();
    let second = aggregator.sum_total(&store).unwrap();
    assert_eq!(first, second);
    assert_eq!(store.len(), 5);
}

#[test]
fn parallel_path_matches_serial_path() {
    let mut store = PathwayStore::new();
    for (i, value) in [0.1, 0.2, 0.3, 1e-17, 7.7].into_iter().enumerate() {
        store
            .add(PathwayType::R1fs, i as i64, constant_grid(16, 16, value))
            .unwrap();
    }
    let serial = Aggregator::new(AggregationConfig {
        parallel_min_elements: usize::MAX,
    });
    let parallel = Aggregator::new(AggregationConfig {
        parallel_min_elements: 1,
    });
    assert_eq!(
        serial.sum_total(&store).unwrap(),
        parallel.sum_total(&store).unwrap()
    );
}

// ── Summation primitive ───────────────────────────────────────────────────

#[test]
fn sum_grids_of_nothing_is_none() {
    let grids: Vec<ndarray::Array2<f64>> = Vec::new();
    assert!(sum_grids(grids.iter(), 1).unwrap().is_none());
}

#[test]
fn sum_grids_detects_shape_mismatch() {
    let grids = [constant_grid(2, 2, 1.0), constant_grid(3, 2, 1.0)];
    let err = sum_grids(grids.iter(), 1024).unwrap_err();
    match err {
        SpectrumError::ShapeMismatch { expected, found } => {
            assert_eq!(expected, GridShape::new(2, 2));
            assert_eq!(found, GridShape::new(3, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn integer_elements_sum_through_add_assign() {
    let grids = [array![[1i64, 2], [3, 4]], array![[5i64, 6], [7, 8]]];
    let summed = sum_grids(grids.iter(), 1).unwrap().unwrap();
    assert_eq!(summed, array![[6i64, 8], [10, 12]]);
}
