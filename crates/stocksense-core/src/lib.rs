//! Core contracts for stocksense.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Price-series normalization
//! - Technical indicator math (RSI, MACD, Bollinger Bands)
//! - Lexicon-based news sentiment aggregation
//! - Decision fusion into a BUY/SELL/HOLD recommendation
//! - Capability traits for external data sources and the response
//!   envelope used at the CLI boundary

pub mod config;
pub mod data_source;
pub mod decision;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod indicators;
pub mod normalize;
pub mod recommendation;
pub mod sentiment;

pub use config::{AnalysisConfig, SentimentThresholds};
pub use data_source::{NewsSource, PriceHistorySource, SourceError, SourceErrorKind};
pub use decision::{fuse, Decision, Verdict};
pub use domain::{NewsItem, PricePoint, PriceSeries, Symbol, UtcDateTime};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{AnalysisError, CoreError, ValidationError};
pub use indicators::{
    BollingerBands, IndicatorGap, IndicatorKind, IndicatorSnapshot, Macd,
};
pub use normalize::normalize_series;
pub use recommendation::{compute_recommendation, Analyzer, Recommendation};
pub use sentiment::{Lexicon, LexiconScorer, SentimentScorer, SentimentSnapshot};
