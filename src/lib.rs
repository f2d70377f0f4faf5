//! Column and local-maximum statistics over integer grids read from text files.

pub mod app;
pub mod error;
pub mod grid;
pub mod grid_stats;
pub mod logging;
pub mod parse;
pub mod report;

pub use error::GridStatsError;
pub use grid::{FIXED_CAPACITY, FixedBuffer, Grid, GridStorage, HeapBuffer, Mode};
pub use grid_stats::{GridStats, count_columns_with_no_same_adjacent, count_local_maxima};
