//! Row-major integer grid generic over its backing storage.

pub mod storage;

pub use storage::{FIXED_CAPACITY, FixedBuffer, HeapBuffer, Mode};

use crate::error::GridStatsError;

/// An index-addressable integer buffer of a fixed length, chosen at allocation time.
pub trait GridStorage: Sized {
    /// Allocates a zeroed buffer holding exactly `len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`GridStatsError::CapacityExceeded`] or [`GridStatsError::AllocationFailure`]
    /// depending on the storage strategy.
    fn allocate(len: usize) -> Result<Self, GridStatsError>;

    fn as_slice(&self) -> &[i32];

    fn as_mut_slice(&mut self) -> &mut [i32];
}

/// A `rows x cols` table of `i32` stored row-major in `S`.
///
/// `storage.as_slice().len() == rows * cols` holds for every constructed grid.
#[derive(Debug, Clone)]
pub struct Grid<S> {
    rows: usize,
    cols: usize,
    storage: S,
}

impl<S: GridStorage> Grid<S> {
    /// Allocates a zero-filled grid.
    ///
    /// # Errors
    ///
    /// Propagates the storage strategy's allocation error.
    pub fn zeroed(rows: usize, cols: usize) -> Result<Self, GridStatsError> {
        // A saturated product exceeds every capacity, so overflow surfaces as the storage error.
        let storage = S::allocate(rows.saturating_mul(cols))?;
        Ok(Self {
            rows,
            cols,
            storage,
        })
    }

    /// Builds a grid from nested rows; every row must have the first row's length.
    ///
    /// # Errors
    ///
    /// [`GridStatsError::RaggedRow`] for a row of the wrong length, or the storage error.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, GridStatsError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridStatsError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }

        let mut grid = Self::zeroed(rows.len(), cols)?;
        for (dst, src) in grid
            .cells_mut()
            .chunks_exact_mut(cols.max(1))
            .zip(rows.iter())
        {
            dst.copy_from_slice(src);
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`. Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i32 {
        debug_assert!(row < self.rows && col < self.cols, "({row}, {col}) outside grid");
        self.storage.as_slice()[row * self.cols + col]
    }

    pub fn cells(&self) -> &[i32] {
        self.storage.as_slice()
    }

    pub fn cells_mut(&mut self) -> &mut [i32] {
        self.storage.as_mut_slice()
    }
}
