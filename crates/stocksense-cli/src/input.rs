use std::fs;
use std::path::{Path, PathBuf};

use stocksense_core::{
    NewsItem, NewsSource, PriceHistorySource, PricePoint, SourceError, Symbol,
};

/// File-backed data source over JSON fixtures produced by an external
/// fetcher. Implements the core capability traits so the CLI consumes
/// data exactly the way any other collaborator would.
pub struct FileSource {
    prices_path: Option<PathBuf>,
    news_path: Option<PathBuf>,
}

impl FileSource {
    pub fn new(prices_path: Option<PathBuf>, news_path: Option<PathBuf>) -> Self {
        Self {
            prices_path,
            news_path,
        }
    }

    fn read(path: &Path) -> Result<String, SourceError> {
        fs::read_to_string(path).map_err(|error| {
            SourceError::unavailable(format!("cannot read '{}': {error}", path.display()))
        })
    }
}

impl PriceHistorySource for FileSource {
    fn price_history(&self, _symbol: &Symbol, limit: usize) -> Result<Vec<PricePoint>, SourceError> {
        let Some(path) = &self.prices_path else {
            return Err(SourceError::invalid_request("no price file configured"));
        };

        let payload = Self::read(path)?;
        let mut points: Vec<PricePoint> = serde_json::from_str(&payload).map_err(|error| {
            SourceError::invalid_request(format!(
                "invalid price records in '{}': {error}",
                path.display()
            ))
        })?;

        // Keep the most recent `limit` records. The sort is stable so
        // received order survives for duplicate timestamps.
        points.sort_by_key(|point| point.ts);
        if points.len() > limit {
            points.drain(..points.len() - limit);
        }
        Ok(points)
    }
}

impl NewsSource for FileSource {
    fn news(&self, _symbol: &Symbol, limit: usize) -> Result<Vec<NewsItem>, SourceError> {
        let Some(path) = &self.news_path else {
            return Err(SourceError::invalid_request("no news file configured"));
        };

        let payload = Self::read(path)?;
        let mut items: Vec<NewsItem> = serde_json::from_str(&payload).map_err(|error| {
            SourceError::invalid_request(format!(
                "invalid news items in '{}': {error}",
                path.display()
            ))
        })?;

        items.sort_by_key(|item| item.published_at);
        if items.len() > limit {
            items.drain(..items.len() - limit);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn symbol() -> Symbol {
        Symbol::parse("AAPL").expect("symbol")
    }

    #[test]
    fn missing_file_is_unavailable() {
        let source = FileSource::new(Some(PathBuf::from("/nonexistent/prices.json")), None);
        let err = source.price_history(&symbol(), 10).expect_err("must fail");
        assert_eq!(err.code(), "source.unavailable");
    }

    #[test]
    fn malformed_json_is_invalid_request() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{not json").expect("write");
        let source = FileSource::new(Some(file.path().to_path_buf()), None);
        let err = source.price_history(&symbol(), 10).expect_err("must fail");
        assert_eq!(err.code(), "source.invalid_request");
    }

    #[test]
    fn limit_keeps_most_recent_records() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let payload = r#"[
            {"ts": "2024-01-03T00:00:00Z", "open": 12.0, "high": 13.0, "low": 11.0, "close": 12.0},
            {"ts": "2024-01-01T00:00:00Z", "open": 10.0, "high": 11.0, "low": 9.0, "close": 10.0},
            {"ts": "2024-01-02T00:00:00Z", "open": 11.0, "high": 12.0, "low": 10.0, "close": 11.0}
        ]"#;
        write!(file, "{payload}").expect("write");
        let source = FileSource::new(Some(file.path().to_path_buf()), None);

        let points = source.price_history(&symbol(), 2).expect("must load");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].close, 11.0);
        assert_eq!(points[1].close, 12.0);
    }

    #[test]
    fn rejects_invalid_price_record() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let payload = r#"[
            {"ts": "2024-01-01T00:00:00Z", "open": 10.0, "high": 9.0, "low": 11.0, "close": 10.0}
        ]"#;
        write!(file, "{payload}").expect("write");
        let source = FileSource::new(Some(file.path().to_path_buf()), None);
        let err = source.price_history(&symbol(), 10).expect_err("must fail");
        assert_eq!(err.code(), "source.invalid_request");
    }
}
