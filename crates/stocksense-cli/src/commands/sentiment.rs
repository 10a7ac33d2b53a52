use stocksense_core::{
    LexiconScorer, NewsSource, SentimentSnapshot, SentimentThresholds, Symbol,
};

use crate::cli::SentimentArgs;
use crate::error::CliError;
use crate::input::FileSource;

use super::CommandResult;

pub fn run(args: &SentimentArgs) -> Result<CommandResult, CliError> {
    let defaults = SentimentThresholds::default();
    let thresholds = SentimentThresholds {
        positive: args.positive_threshold.unwrap_or(defaults.positive),
        negative: args.negative_threshold.unwrap_or(defaults.negative),
    };
    thresholds.validate()?;

    let symbol = Symbol::parse(args.symbol.as_deref().unwrap_or("NEWS"))?;

    let source = FileSource::new(None, Some(args.news.clone()));
    let items = source.news(&symbol, args.limit)?;

    let snapshot = SentimentSnapshot::aggregate(&items, &LexiconScorer::default(), &thresholds);

    let mut result = CommandResult::ok(serde_json::to_value(snapshot)?);
    if let Some(symbol) = &args.symbol {
        result = result.with_symbol(symbol.to_ascii_uppercase());
    }
    Ok(result)
}
