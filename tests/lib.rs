// Shared fixtures for stocksense behavioral tests.
pub use stocksense_core::{
    compute_recommendation, normalize_series, AnalysisConfig, AnalysisError, Analyzer,
    IndicatorKind, IndicatorSnapshot, NewsItem, PricePoint, SentimentSnapshot,
    SentimentThresholds, Symbol, UtcDateTime, Verdict,
};

/// Daily price point `index` days after a fixed epoch, with a tight
/// high/low band around the close.
pub fn daily_point(index: i64, close: f64) -> PricePoint {
    let ts = UtcDateTime::from_unix_timestamp(1_700_000_000 + index * 86_400).expect("timestamp");
    PricePoint::new(ts, close, close * 1.02, close * 0.98, close, Some(10_000))
        .expect("valid price point")
}

pub fn history_from_closes(closes: &[f64]) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(index, &close)| daily_point(index as i64, close))
        .collect()
}

pub fn news_item(text: &str) -> NewsItem {
    NewsItem::new(
        text,
        UtcDateTime::parse("2024-03-01T12:00:00Z").expect("timestamp"),
    )
}

pub fn news_batch(texts: &[&str]) -> Vec<NewsItem> {
    texts.iter().map(|text| news_item(text)).collect()
}
