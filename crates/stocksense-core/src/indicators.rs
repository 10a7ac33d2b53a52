//! Technical indicator math over normalized close prices.
//!
//! Pure computation: no I/O, no side effects. RSI uses Wilder's
//! smoothing, MACD uses SMA-seeded EMAs, Bollinger Bands use population
//! standard deviation. Each indicator checks its own minimum window so a
//! series long enough for one indicator but not another yields a partial
//! snapshot instead of a hard failure.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{AnalysisConfig, AnalysisError, PriceSeries};

/// Indicator identifiers used in gap reporting and warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Rsi,
    Macd,
    BollingerBands,
}

impl IndicatorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rsi => "rsi",
            Self::Macd => "macd",
            Self::BollingerBands => "bollinger_bands",
        }
    }
}

impl Display for IndicatorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of an indicator skipped for lack of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorGap {
    pub indicator: IndicatorKind,
    pub required: usize,
    pub provided: usize,
}

impl Display for IndicatorGap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} unavailable: requires at least {} points, got {}",
            self.indicator, self.required, self.provided
        )
    }
}

impl From<IndicatorGap> for AnalysisError {
    fn from(gap: IndicatorGap) -> Self {
        Self::InsufficientData {
            context: gap.indicator.as_str(),
            required: gap.required,
            provided: gap.provided,
        }
    }
}

/// MACD line, signal line, and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Volatility bands at ± multiplier standard deviations around an SMA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Derived indicator values for the latest point of a series.
///
/// Recomputed per request; absent indicators are listed in `gaps` with
/// the window they would have needed. Never carries substitute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi: Option<f64>,
    pub macd: Option<Macd>,
    pub bollinger: Option<BollingerBands>,
    pub last_close: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gaps: Vec<IndicatorGap>,
}

impl IndicatorSnapshot {
    /// Compute all configured indicators over the tail of `series`.
    ///
    /// Indicators fail independently: MACD may be present while
    /// Bollinger Bands are not.
    pub fn compute(series: &PriceSeries, config: &AnalysisConfig) -> Self {
        let closes = series.closes();
        let last_close = series
            .last_close()
            .expect("normalized series is non-empty");

        let mut gaps = Vec::new();
        let rsi = collect_gap(rsi(&closes, config.rsi_period), &mut gaps);
        let macd = collect_gap(
            macd(&closes, config.macd_fast, config.macd_slow, config.macd_signal),
            &mut gaps,
        );
        let bollinger = collect_gap(
            bollinger(&closes, config.bollinger_period, config.bollinger_multiplier),
            &mut gaps,
        );

        Self {
            rsi,
            macd,
            bollinger,
            last_close,
            gaps,
        }
    }
}

fn collect_gap<T>(result: Result<T, IndicatorGap>, gaps: &mut Vec<IndicatorGap>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(gap) => {
            gaps.push(gap);
            None
        }
    }
}

/// Exponential moving average track.
///
/// Seeded with the SMA of the first `period` values, then
/// `ema_t = close_t * k + ema_(t-1) * (1 - k)` with `k = 2/(period+1)`.
/// Returns one value per input from index `period - 1`; empty when the
/// input is shorter than `period`.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let seed = values[..period].iter().sum::<f64>() / period as f64;

    let mut track = Vec::with_capacity(values.len() - period + 1);
    track.push(seed);
    for &value in &values[period..] {
        let prev = track[track.len() - 1];
        track.push(value * k + prev * (1.0 - k));
    }
    track
}

/// Relative Strength Index with Wilder's smoothing, in [0, 100].
///
/// Accepts exactly `period` points (the seed average then spans the
/// `period - 1` observed intervals). A window with no losses reads 100;
/// a flat window with neither gains nor losses reads 50.
pub fn rsi(closes: &[f64], period: usize) -> Result<f64, IndicatorGap> {
    if closes.len() < period {
        return Err(IndicatorGap {
            indicator: IndicatorKind::Rsi,
            required: period,
            provided: closes.len(),
        });
    }

    let changes: Vec<f64> = closes.windows(2).map(|pair| pair[1] - pair[0]).collect();
    let seed_len = changes.len().min(period);

    let mut avg_gain = changes[..seed_len]
        .iter()
        .map(|&change| change.max(0.0))
        .sum::<f64>()
        / seed_len as f64;
    let mut avg_loss = changes[..seed_len]
        .iter()
        .map(|&change| (-change).max(0.0))
        .sum::<f64>()
        / seed_len as f64;

    let period_f = period as f64;
    for &change in &changes[seed_len..] {
        avg_gain = (avg_gain * (period_f - 1.0) + change.max(0.0)) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + (-change).max(0.0)) / period_f;
    }

    if avg_loss == 0.0 {
        // No net change convention: a window with no movement at all is
        // neutral rather than overbought.
        if avg_gain == 0.0 {
            return Ok(50.0);
        }
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok((100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0))
}

/// MACD line, signal, and histogram for the latest close.
///
/// `line = EMA(fast) - EMA(slow)`, `signal = EMA(line, signal_period)`,
/// `histogram = line - signal` (exact identity). When fewer than
/// `signal_period` line values exist, the signal falls back to the
/// simple average of the available line values as its seed.
pub fn macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Result<Macd, IndicatorGap> {
    if closes.len() < slow {
        return Err(IndicatorGap {
            indicator: IndicatorKind::Macd,
            required: slow,
            provided: closes.len(),
        });
    }

    let fast_track = ema(closes, fast);
    let slow_track = ema(closes, slow);

    // Both tracks end at the final close; the fast track starts earlier.
    let offset = slow - fast;
    let line_values: Vec<f64> = (0..slow_track.len())
        .map(|i| fast_track[i + offset] - slow_track[i])
        .collect();

    let line = *line_values
        .last()
        .expect("macd line series is non-empty when len >= slow");
    let signal_track = ema(&line_values, signal_period);
    let signal = match signal_track.last() {
        Some(&value) => value,
        None => line_values.iter().sum::<f64>() / line_values.len() as f64,
    };

    Ok(Macd {
        line,
        signal,
        histogram: line - signal,
    })
}

/// Bollinger Bands over the trailing `period` closes.
///
/// Middle band = SMA; upper/lower at ± multiplier × population standard
/// deviation, so `upper >= middle >= lower` with symmetric spread.
pub fn bollinger(
    closes: &[f64],
    period: usize,
    multiplier: f64,
) -> Result<BollingerBands, IndicatorGap> {
    if closes.len() < period {
        return Err(IndicatorGap {
            indicator: IndicatorKind::BollingerBands,
            required: period,
            provided: closes.len(),
        });
    }

    let window = &closes[closes.len() - period..];
    let middle = window.iter().sum::<f64>() / period as f64;
    let variance = window
        .iter()
        .map(|&close| {
            let diff = close - middle;
            diff * diff
        })
        .sum::<f64>()
        / period as f64;
    let spread = multiplier * variance.sqrt();

    Ok(BollingerBands {
        upper: middle + spread,
        middle,
        lower: middle - spread,
    })
}
