use clap::ValueEnum;

use super::GridStorage;
use crate::error::GridStatsError;

/// Element ceiling of the bounded strategy.
pub const FIXED_CAPACITY: usize = 10_000;

/// Storage strategy selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Fixed-capacity buffer held in place ([`FixedBuffer`]).
    #[value(name = "1")]
    Bounded,
    /// Heap buffer sized to the grid ([`HeapBuffer`]).
    #[value(name = "2")]
    Dynamic,
}

/// In-place buffer of at most `N` elements.
#[derive(Debug, Clone)]
pub struct FixedBuffer<const N: usize = FIXED_CAPACITY> {
    cells: [i32; N],
    len: usize,
}

impl<const N: usize> GridStorage for FixedBuffer<N> {
    fn allocate(len: usize) -> Result<Self, GridStatsError> {
        if len > N {
            return Err(GridStatsError::CapacityExceeded {
                requested: len,
                capacity: N,
            });
        }
        Ok(Self {
            cells: [0; N],
            len,
        })
    }

    fn as_slice(&self) -> &[i32] {
        &self.cells[..self.len]
    }

    fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.cells[..self.len]
    }
}

/// Heap buffer allocated to exactly the requested length.
#[derive(Debug, Clone, Default)]
pub struct HeapBuffer {
    cells: Vec<i32>,
}

impl GridStorage for HeapBuffer {
    fn allocate(len: usize) -> Result<Self, GridStatsError> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridStatsError::AllocationFailure { requested: len })?;
        cells.resize(len, 0);
        Ok(Self { cells })
    }

    fn as_slice(&self) -> &[i32] {
        &self.cells
    }

    fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.cells
    }
}
