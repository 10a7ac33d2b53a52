use stocksense_core::{compute_recommendation, NewsSource, PriceHistorySource, Symbol};

use crate::cli::AnalyzeArgs;
use crate::error::CliError;
use crate::input::FileSource;

use super::{to_analysis_config, CommandResult};

pub fn run(args: &AnalyzeArgs) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let config = to_analysis_config(&args.config);

    let source = FileSource::new(Some(args.prices.clone()), Some(args.news.clone()));
    let history = source.price_history(&symbol, args.limit)?;
    let news = source.news(&symbol, args.limit)?;

    let recommendation = compute_recommendation(symbol.clone(), history, &news, &config)?;

    let warnings: Vec<String> = recommendation
        .indicators
        .gaps
        .iter()
        .map(ToString::to_string)
        .collect();

    Ok(CommandResult::ok(serde_json::to_value(recommendation)?)
        .with_symbol(symbol.as_str())
        .with_warnings(warnings))
}
