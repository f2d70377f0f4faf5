use std::path::PathBuf;

/// Errors that end a single grid-statistics invocation.
///
/// Every variant is fatal; [`GridStatsError::exit_code`] maps it to the process exit status.
#[derive(Debug, thiserror::Error)]
pub enum GridStatsError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot open input file {}: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open output file {}: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read matrix dimensions: {0}")]
    DimensionParse(String),

    #[error("invalid matrix element at position {index}: {detail}")]
    ElementParse { index: usize, detail: String },

    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("static matrix size {requested} exceeds limit ({capacity})")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("memory allocation failed for {requested} elements")]
    AllocationFailure { requested: usize },

    #[error("cannot serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GridStatsError {
    /// `1` for usage, output and allocation problems; `2` for bad or oversized input.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_)
            | Self::OutputOpen { .. }
            | Self::OutputWrite { .. }
            | Self::AllocationFailure { .. }
            | Self::Serialize(_) => 1,
            Self::InputOpen { .. }
            | Self::DimensionParse(_)
            | Self::ElementParse { .. }
            | Self::RaggedRow { .. }
            | Self::CapacityExceeded { .. } => 2,
        }
    }
}
