//! # End-to-End Recommendation Example
//!
//! Builds a synthetic price history and a small news batch, then runs
//! the full pipeline and prints the verdict with its rationale.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example analyze_fixture
//! ```
//!
//! ## What it demonstrates
//!
//! - Constructing validated price points and news items
//! - Running `compute_recommendation` with the default configuration
//! - Reading indicator values, sentiment, and rationale off the result

use stocksense_core::{
    compute_recommendation, AnalysisConfig, NewsItem, PricePoint, Symbol, UtcDateTime,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let symbol = Symbol::parse("AAPL")?;

    // A gentle uptrend followed by a breakout on the final day.
    let mut history = Vec::new();
    for day in 0..30 {
        let close = if day == 29 { 130.0 } else { 100.0 + day as f64 * 0.1 };
        let ts = UtcDateTime::from_unix_timestamp(1_700_000_000 + day * 86_400)?;
        history.push(PricePoint::new(
            ts,
            close,
            close * 1.02,
            close * 0.98,
            close,
            Some(1_000_000),
        )?);
    }

    let published = UtcDateTime::parse("2024-03-01T12:00:00Z")?;
    let news = vec![
        NewsItem::new("Shares soar on record profit growth", published),
        NewsItem::new("Analysts upgrade after an impressive beat", published),
        NewsItem::new("Minor supply concerns remain", published),
    ];

    let recommendation =
        compute_recommendation(symbol, history, &news, &AnalysisConfig::default())?;

    println!("📊 Recommendation for {}", recommendation.symbol);
    println!("{}", "=".repeat(50));
    println!("  Verdict:   {}", recommendation.verdict);
    println!("  As of:     {}", recommendation.as_of);
    println!(
        "  Sentiment: {:+.3} ({} items)",
        recommendation.sentiment.score, recommendation.sentiment.item_count
    );

    if let Some(rsi) = recommendation.indicators.rsi {
        println!("  RSI:       {rsi:.2}");
    }
    if let Some(macd) = recommendation.indicators.macd {
        println!("  MACD hist: {:+.4}", macd.histogram);
    }
    if let Some(bands) = recommendation.indicators.bollinger {
        println!(
            "  Bands:     {:.2} / {:.2} / {:.2}",
            bands.lower, bands.middle, bands.upper
        );
    }

    println!("\n📍 Rationale:");
    for line in &recommendation.rationale {
        println!("  - {line}");
    }

    for gap in &recommendation.indicators.gaps {
        println!("⚠️  {gap}");
    }

    Ok(())
}
