use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::level_filters::LevelFilter;

use grid_stats::GridStatsError;
use grid_stats::app::{RunConfig, run};
use grid_stats::grid::Mode;
use grid_stats::logging;
use grid_stats::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "grid_stats",
    about = "Count columns without equal vertical neighbors and strict local maxima in an integer grid",
    version
)]
struct Cli {
    /// Storage strategy: 1 = fixed capacity, 2 = heap allocated
    #[arg(value_enum)]
    mode: Mode,

    /// Input file: `rows cols` followed by rows*cols integers
    input: PathBuf,

    /// Output file receiving both statistics
    output: PathBuf,

    /// Output file layout
    #[arg(long = "format", short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Diagnostic log level (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", env = "GRID_STATS_LOG", default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Help and version go to stdout.
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let err = GridStatsError::Usage(e.render().to_string());
            eprint!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    logging::init(cli.log_level);

    let config = RunConfig {
        mode: cli.mode,
        input: cli.input,
        output: cli.output,
        format: cli.format,
    };

    match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
