use stocksense_core::{normalize_series, IndicatorSnapshot, PriceHistorySource, Symbol};

use crate::cli::IndicatorsArgs;
use crate::error::CliError;
use crate::input::FileSource;

use super::{to_analysis_config, CommandResult};

pub fn run(args: &IndicatorsArgs) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let config = to_analysis_config(&args.config);
    config.validate()?;

    let source = FileSource::new(Some(args.prices.clone()), None);
    let history = source.price_history(&symbol, args.limit)?;

    let series = normalize_series(history, config.min_required_points())?;
    let snapshot = IndicatorSnapshot::compute(&series, &config);

    let warnings: Vec<String> = snapshot.gaps.iter().map(ToString::to_string).collect();

    Ok(CommandResult::ok(serde_json::to_value(snapshot)?)
        .with_symbol(symbol.as_str())
        .with_warnings(warnings))
}
