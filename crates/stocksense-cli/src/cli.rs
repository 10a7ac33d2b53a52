use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Offline stock recommendation engine over pre-fetched market data.
#[derive(Debug, Parser)]
#[command(name = "stocksense", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format for the response envelope.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Exit non-zero when the envelope carries warnings or errors.
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Produce a BUY/SELL/HOLD recommendation from price history and news.
    Analyze(AnalyzeArgs),
    /// Compute the indicator snapshot only.
    Indicators(IndicatorsArgs),
    /// Score a news batch only.
    Sentiment(SentimentArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Indicator and threshold overrides shared by commands that compute
/// indicators. Defaults come from `AnalysisConfig`.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long)]
    pub rsi_period: Option<usize>,
    #[arg(long)]
    pub macd_fast: Option<usize>,
    #[arg(long)]
    pub macd_slow: Option<usize>,
    #[arg(long)]
    pub macd_signal: Option<usize>,
    #[arg(long)]
    pub bollinger_period: Option<usize>,
    #[arg(long)]
    pub bollinger_multiplier: Option<f64>,
    #[arg(long)]
    pub positive_threshold: Option<f64>,
    #[arg(long)]
    pub negative_threshold: Option<f64>,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Ticker symbol the input files describe.
    #[arg(long)]
    pub symbol: String,

    /// JSON file with raw price records.
    #[arg(long)]
    pub prices: PathBuf,

    /// JSON file with news items.
    #[arg(long)]
    pub news: PathBuf,

    /// Use at most this many of the most recent records per input.
    #[arg(long, default_value_t = 250)]
    pub limit: usize,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args)]
pub struct IndicatorsArgs {
    #[arg(long)]
    pub symbol: String,

    /// JSON file with raw price records.
    #[arg(long)]
    pub prices: PathBuf,

    #[arg(long, default_value_t = 250)]
    pub limit: usize,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args)]
pub struct SentimentArgs {
    /// Ticker the news batch is about (metadata only).
    #[arg(long)]
    pub symbol: Option<String>,

    /// JSON file with news items.
    #[arg(long)]
    pub news: PathBuf,

    #[arg(long, default_value_t = 250)]
    pub limit: usize,

    #[arg(long)]
    pub positive_threshold: Option<f64>,
    #[arg(long)]
    pub negative_threshold: Option<f64>,
}
