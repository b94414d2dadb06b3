//! Property tests at the facade: round trip and category partitioning.

use liouville_spectrum::{PathwayType, Process, TwoDSpectrum};
use ndarray::Array2;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_save_get_roundtrip(
        ty_index in 0usize..PathwayType::COUNT,
        tag in "[a-z0-9]{1,12}",
        values in prop::collection::vec(-1.0e3f64..1.0e3, 6),
    ) {
        let pathway = PathwayType::ALL[ty_index];
        let grid = Array2::from_shape_vec((2, 3), values).unwrap();
        let mut spectrum = TwoDSpectrum::new();
        spectrum.save(pathway, tag.as_str(), grid.clone()).unwrap();
        prop_assert_eq!(spectrum.get(pathway, tag.as_str()).unwrap(), &grid);
    }

    #[test]
    fn prop_processes_partition_classified_pathways(
        values in prop::collection::vec((0usize..6, -100i32..100), 1..12),
    ) {
        // Indexes 0..6 cover exactly the classified pathway types.
        let mut spectrum = TwoDSpectrum::new();
        let mut expected = Array2::<f64>::zeros((2, 2));
        for (i, (ty_index, value)) in values.iter().enumerate() {
            let grid = Array2::from_elem((2, 2), f64::from(*value));
            expected = expected + &grid;
            spectrum.save(PathwayType::ALL[*ty_index], i as i64, grid).unwrap();
        }
        let mut by_process = Array2::<f64>::zeros((2, 2));
        for process in Process::ALL {
            if let Ok(grid) = spectrum.get_by_process(process) {
                by_process = by_process + &grid;
            }
        }
        prop_assert_eq!(by_process, expected);
    }
}
