//! One invocation: read the input grid, compute both statistics, write the report.

use std::fs;
use std::path::PathBuf;

use crate::error::GridStatsError;
use crate::grid::{FixedBuffer, GridStorage, HeapBuffer, Mode};
use crate::grid_stats::GridStats;
use crate::parse::{self, Header};
use crate::report::{self, OutputFormat};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
}

/// Runs the whole pipeline and returns the statistics that were written.
///
/// The output file is only created once the input has been fully read and both
/// statistics computed, so no error path leaves a partial report behind.
///
/// # Errors
///
/// Any [`GridStatsError`]; see [`GridStatsError::exit_code`] for the exit status mapping.
pub fn run(config: &RunConfig) -> Result<GridStats, GridStatsError> {
    let input = fs::read(&config.input).map_err(|source| GridStatsError::InputOpen {
        path: config.input.clone(),
        source,
    })?;

    let mut tokens = parse::tokens(&input);
    let header = parse::read_header(&mut tokens)?;
    tracing::debug!(rows = header.rows, cols = header.cols, "read header");

    let stats = if header.is_degenerate() {
        tracing::debug!("zero-sized grid, skipping element data");
        GridStats::default()
    } else {
        match config.mode {
            Mode::Bounded => compute::<FixedBuffer>(header, &mut tokens)?,
            Mode::Dynamic => compute::<HeapBuffer>(header, &mut tokens)?,
        }
    };
    tracing::info!(
        columns = stats.columns,
        local_maxima = stats.local_maxima,
        "computed statistics"
    );

    report::write_report(&config.output, &stats, config.format)?;
    Ok(stats)
}

fn compute<'a, S: GridStorage>(
    header: Header,
    tokens: &mut impl Iterator<Item = &'a [u8]>,
) -> Result<GridStats, GridStatsError> {
    let grid = parse::read_grid::<S>(header, tokens)?;
    tracing::debug!(
        storage = std::any::type_name::<S>(),
        cells = grid.cells().len(),
        "loaded grid"
    );
    Ok(GridStats::compute(&grid))
}
