use grid_stats::{
    FixedBuffer, Grid, GridStats, HeapBuffer, count_columns_with_no_same_adjacent,
    count_local_maxima,
};
use proptest::prelude::*;

fn arb_rows() -> impl Strategy<Value = Vec<Vec<i32>>> {
    (0usize..12, 0usize..12).prop_flat_map(|(rows, cols)| {
        // Small value range so equal neighbors and ties actually occur.
        proptest::collection::vec(proptest::collection::vec(-3i32..4, cols), rows)
    })
}

proptest! {
    #[test]
    fn strategies_return_identical_stats(rows in arb_rows()) {
        let fixed = Grid::<FixedBuffer>::from_rows(&rows).unwrap();
        let dynamic = Grid::<HeapBuffer>::from_rows(&rows).unwrap();
        prop_assert_eq!(GridStats::compute(&fixed), GridStats::compute(&dynamic));
    }

    #[test]
    fn statistics_stay_in_range(rows in arb_rows()) {
        let grid = Grid::<HeapBuffer>::from_rows(&rows).unwrap();
        let (r, c) = (grid.rows(), grid.cols());

        prop_assert!(count_columns_with_no_same_adjacent(&grid) <= c);
        let interior = r.saturating_sub(2) * c.saturating_sub(2);
        prop_assert!(count_local_maxima(&grid) <= interior);
    }

    #[test]
    fn short_grids_have_no_maxima(rows in arb_rows()) {
        let grid = Grid::<HeapBuffer>::from_rows(&rows).unwrap();
        if grid.rows() < 3 || grid.cols() < 3 {
            prop_assert_eq!(count_local_maxima(&grid), 0);
        }
        if grid.rows() < 2 {
            prop_assert_eq!(count_columns_with_no_same_adjacent(&grid), grid.cols());
        }
    }

    #[test]
    fn maxima_are_never_adjacent(rows in arb_rows()) {
        // Two strict maxima cannot touch: each would have to exceed the other.
        let grid = Grid::<HeapBuffer>::from_rows(&rows).unwrap();
        let (r, c) = (grid.rows(), grid.cols());
        let interior = r.saturating_sub(2) * c.saturating_sub(2);
        prop_assert!(count_local_maxima(&grid) <= interior.div_ceil(2));
    }
}
