use thiserror::Error;

/// CLI-level error categories.
///
/// Exit codes: validation faults 2, analysis failures 3, data-source
/// failures 4, strict-mode violations 5, everything else 10.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] stocksense_core::ValidationError),

    #[error(transparent)]
    Analysis(#[from] stocksense_core::AnalysisError),

    #[error(transparent)]
    Source(#[from] stocksense_core::SourceError),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Analysis(_) => 3,
            Self::Source(_) => 4,
            Self::StrictModeViolation { .. } => 5,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
