mod analyze;
mod indicators;
mod sentiment;

use std::time::Instant;

use serde_json::Value;
use stocksense_core::{
    AnalysisConfig, Envelope, EnvelopeError, EnvelopeMeta, SentimentThresholds,
};
use uuid::Uuid;

use crate::cli::{Cli, Command, ConfigArgs};
use crate::error::CliError;

const SCHEMA_VERSION: &str = "v1.0.0";

pub struct CommandResult {
    pub data: Value,
    pub symbol: Option<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            symbol: None,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Analyze(args) => analyze::run(args)?,
        Command::Indicators(args) => indicators::run(args)?,
        Command::Sentiment(args) => sentiment::run(args)?,
    };

    let CommandResult {
        data,
        symbol,
        warnings,
        errors,
    } = command_result;

    let latency_ms = started.elapsed().as_millis() as u64;
    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), SCHEMA_VERSION, latency_ms)?;
    if let Some(symbol) = symbol {
        meta = meta.with_symbol(symbol);
    }
    for warning in warnings {
        meta.push_warning(warning);
    }

    let mut envelope = Envelope::success(meta, data);
    for error in errors {
        envelope.push_error(error)?;
    }
    Ok(envelope)
}

/// Apply CLI overrides on top of the default analysis config.
pub(crate) fn to_analysis_config(args: &ConfigArgs) -> AnalysisConfig {
    let defaults = AnalysisConfig::default();
    AnalysisConfig {
        rsi_period: args.rsi_period.unwrap_or(defaults.rsi_period),
        macd_fast: args.macd_fast.unwrap_or(defaults.macd_fast),
        macd_slow: args.macd_slow.unwrap_or(defaults.macd_slow),
        macd_signal: args.macd_signal.unwrap_or(defaults.macd_signal),
        bollinger_period: args.bollinger_period.unwrap_or(defaults.bollinger_period),
        bollinger_multiplier: args
            .bollinger_multiplier
            .unwrap_or(defaults.bollinger_multiplier),
        sentiment_thresholds: SentimentThresholds {
            positive: args
                .positive_threshold
                .unwrap_or(defaults.sentiment_thresholds.positive),
            negative: args
                .negative_threshold
                .unwrap_or(defaults.sentiment_thresholds.negative),
        },
    }
}
