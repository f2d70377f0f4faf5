use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::GridStatsError;
use crate::grid_stats::GridStats;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Column statistic and local-maxima statistic on two lines.
    #[default]
    Text,
    /// `{"columns":N,"local_maxima":M}` on one line.
    Json,
}

/// Renders the complete output file contents.
///
/// # Errors
///
/// [`GridStatsError::Serialize`] if JSON encoding fails.
pub fn render(stats: &GridStats, format: OutputFormat) -> Result<String, GridStatsError> {
    Ok(match format {
        OutputFormat::Text => format!("{}\n{}\n", stats.columns, stats.local_maxima),
        OutputFormat::Json => {
            let mut out = serde_json::to_string(stats)?;
            out.push('\n');
            out
        }
    })
}

/// Writes the rendered report to `path` in one call.
///
/// If the write fails part way, the file is removed again only when this call
/// created it; a pre-existing path (symlink, device, earlier report) is left alone.
///
/// # Errors
///
/// [`GridStatsError::OutputOpen`] when the file cannot be opened,
/// [`GridStatsError::OutputWrite`] when writing fails.
pub fn write_report(
    path: &Path,
    stats: &GridStats,
    format: OutputFormat,
) -> Result<(), GridStatsError> {
    let contents = render(stats, format)?;
    let open_err = |source| GridStatsError::OutputOpen {
        path: path.to_path_buf(),
        source,
    };

    let (mut file, created) = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => (file, true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            (File::create(path).map_err(open_err)?, false)
        }
        Err(e) => return Err(open_err(e)),
    };

    if let Err(source) = file.write_all(contents.as_bytes()).and_then(|()| file.flush()) {
        drop(file);
        if created && let Err(e) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove partial output");
        }
        return Err(GridStatsError::OutputWrite {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::debug!(path = %path.display(), bytes = contents.len(), created, "wrote report");
    Ok(())
}
