//! Column and local-maximum statistics, shared by every storage strategy.

use serde::Serialize;

use crate::grid::{Grid, GridStorage};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Both statistics for one grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GridStats {
    pub columns: usize,
    pub local_maxima: usize,
}

impl GridStats {
    pub fn compute<S: GridStorage>(grid: &Grid<S>) -> Self {
        Self {
            columns: count_columns_with_no_same_adjacent(grid),
            local_maxima: count_local_maxima(grid),
        }
    }
}

/// Counts columns in which no two vertically adjacent cells are equal.
///
/// A grid with fewer than two rows counts every column.
pub fn count_columns_with_no_same_adjacent<S: GridStorage>(grid: &Grid<S>) -> usize {
    let (rows, cols) = (grid.rows(), grid.cols());
    if cols == 0 {
        return 0;
    }
    if rows < 2 {
        return cols;
    }

    (0..cols)
        .filter(|&col| (0..rows - 1).all(|row| grid.get(row, col) != grid.get(row + 1, col)))
        .count()
}

/// Counts interior cells strictly greater than all eight neighbors.
///
/// Border cells never qualify, so grids narrower than 3 in either direction yield 0.
pub fn count_local_maxima<S: GridStorage>(grid: &Grid<S>) -> usize {
    let (rows, cols) = (grid.rows(), grid.cols());
    if rows < 3 || cols < 3 {
        return 0;
    }

    (1..rows - 1)
        .flat_map(|row| (1..cols - 1).map(move |col| (row, col)))
        .filter(|&(row, col)| is_strict_local_max(grid, row, col))
        .count()
}

fn is_strict_local_max<S: GridStorage>(grid: &Grid<S>, row: usize, col: usize) -> bool {
    let center = grid.get(row, col);
    // Interior cells keep every offset in bounds.
    NEIGHBOR_OFFSETS.iter().all(|&(dr, dc)| {
        center > grid.get(row.wrapping_add_signed(dr), col.wrapping_add_signed(dc))
    })
}
