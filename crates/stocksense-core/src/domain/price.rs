use serde::{Deserialize, Serialize};

use crate::{UtcDateTime, ValidationError};

/// Single OHLCV observation for one timestamp.
///
/// Immutable once constructed; the constructor is the only validation
/// boundary for price data entering the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPricePoint")]
pub struct PricePoint {
    pub ts: UtcDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

/// Wire shape accepted from provider fixtures before validation.
#[derive(Debug, Clone, Deserialize)]
struct RawPricePoint {
    ts: UtcDateTime,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    #[serde(default)]
    volume: Option<u64>,
}

impl PricePoint {
    pub fn new(
        ts: UtcDateTime,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: Option<u64>,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("open", open)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;

        if close <= 0.0 {
            return Err(ValidationError::NonPositiveClose { close });
        }

        if high < low {
            return Err(ValidationError::InvalidPriceRange);
        }

        if open < low || open > high || close < low || close > high {
            return Err(ValidationError::InvalidPriceBounds);
        }

        Ok(Self {
            ts,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

impl TryFrom<RawPricePoint> for PricePoint {
    type Error = ValidationError;

    fn try_from(raw: RawPricePoint) -> Result<Self, Self::Error> {
        Self::new(raw.ts, raw.open, raw.high, raw.low, raw.close, raw.volume)
    }
}

/// Canonical chronological price series with strictly increasing
/// timestamps. Produced only by [`crate::normalize::normalize_series`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Invariant: `points` is sorted ascending with unique timestamps.
    pub(crate) fn from_sorted(points: Vec<PricePoint>) -> Self {
        debug_assert!(points.windows(2).all(|pair| pair[0].ts < pair[1].ts));
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.close).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|point| point.close)
    }

    pub fn last_timestamp(&self) -> Option<UtcDateTime> {
        self.points.last().map(|point| point.ts)
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> UtcDateTime {
        UtcDateTime::parse(value).expect("timestamp")
    }

    #[test]
    fn rejects_zero_close() {
        let err = PricePoint::new(ts("2024-01-01T00:00:00Z"), 0.0, 0.0, 0.0, 0.0, None)
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::NonPositiveClose { .. }));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = PricePoint::new(ts("2024-01-01T00:00:00Z"), 10.0, 9.0, 11.0, 10.0, Some(5))
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPriceRange));
    }

    #[test]
    fn rejects_close_outside_bounds() {
        let err = PricePoint::new(ts("2024-01-01T00:00:00Z"), 10.0, 12.0, 9.0, 12.5, Some(5))
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPriceBounds));
    }

    #[test]
    fn rejects_non_finite_field() {
        let err = PricePoint::new(
            ts("2024-01-01T00:00:00Z"),
            f64::NAN,
            12.0,
            9.0,
            10.0,
            None,
        )
        .expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NonFiniteValue { field: "open" }
        ));
    }
}
