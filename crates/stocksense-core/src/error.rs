use thiserror::Error;

/// Validation and contract errors exposed by `stocksense-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("price point close must be positive, got {close}")]
    NonPositiveClose { close: f64 },
    #[error("price point high must be >= low")]
    InvalidPriceRange,
    #[error("price point open/close must be within high/low range")]
    InvalidPriceBounds,

    #[error("period '{field}' must be greater than zero")]
    ZeroPeriod { field: &'static str },
    #[error("macd fast period {fast} must be less than slow period {slow}")]
    MacdPeriodOrder { fast: usize, slow: usize },
    #[error("bollinger multiplier must be positive, got {value}")]
    NonPositiveMultiplier { value: f64 },
    #[error(
        "sentiment thresholds must satisfy negative < 0 < positive, got [{negative}, {positive}]"
    )]
    InvalidSentimentThresholds { positive: f64, negative: f64 },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Errors surfaced by the recommendation pipeline.
///
/// Indicator-level data gaps are not errors: a series long enough for one
/// indicator but not another produces a partial snapshot with warnings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// Malformed input data, surfaced to the caller as a client fault.
    #[error(transparent)]
    InvalidPrice(#[from] ValidationError),

    /// Too little history for a required computation path; the caller
    /// should request a longer lookback.
    #[error(
        "insufficient data for {context}: requires at least {required} points, got {provided}"
    )]
    InsufficientData {
        context: &'static str,
        required: usize,
        provided: usize,
    },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
