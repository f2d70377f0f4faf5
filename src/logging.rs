use tracing::level_filters::LevelFilter;

/// Installs a global stderr subscriber at `level`.
///
/// A second call, or a subscriber installed elsewhere, is reported and otherwise ignored.
pub fn init(level: LevelFilter) {
    if level == LevelFilter::OFF {
        return;
    }

    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: logging not initialized: {e}");
    }
}
