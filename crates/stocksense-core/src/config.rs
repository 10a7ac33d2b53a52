use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Classification thresholds applied to per-item sentiment scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentThresholds {
    /// Scores strictly above this value classify as positive.
    pub positive: f64,
    /// Scores strictly below this value classify as negative.
    pub negative: f64,
}

impl SentimentThresholds {
    pub const DEFAULT_POSITIVE: f64 = 0.05;
    pub const DEFAULT_NEGATIVE: f64 = -0.05;

    pub fn validate(&self) -> Result<(), ValidationError> {
        let well_formed = self.positive.is_finite()
            && self.negative.is_finite()
            && self.negative < 0.0
            && self.positive > 0.0;
        if !well_formed {
            return Err(ValidationError::InvalidSentimentThresholds {
                positive: self.positive,
                negative: self.negative,
            });
        }
        Ok(())
    }
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            positive: Self::DEFAULT_POSITIVE,
            negative: Self::DEFAULT_NEGATIVE,
        }
    }
}

/// Tunable parameters for one recommendation request.
///
/// Passed explicitly through the pipeline; the core carries no ambient
/// process-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_multiplier: f64,
    pub sentiment_thresholds: SentimentThresholds,
}

impl AnalysisConfig {
    pub const DEFAULT_RSI_PERIOD: usize = 14;
    pub const DEFAULT_MACD_FAST: usize = 12;
    pub const DEFAULT_MACD_SLOW: usize = 26;
    pub const DEFAULT_MACD_SIGNAL: usize = 9;
    pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
    pub const DEFAULT_BOLLINGER_MULTIPLIER: f64 = 2.0;

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, period) in [
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("bollinger_period", self.bollinger_period),
        ] {
            if period == 0 {
                return Err(ValidationError::ZeroPeriod { field });
            }
        }

        if self.macd_fast >= self.macd_slow {
            return Err(ValidationError::MacdPeriodOrder {
                fast: self.macd_fast,
                slow: self.macd_slow,
            });
        }

        if !self.bollinger_multiplier.is_finite() || self.bollinger_multiplier <= 0.0 {
            return Err(ValidationError::NonPositiveMultiplier {
                value: self.bollinger_multiplier,
            });
        }

        self.sentiment_thresholds.validate()
    }

    /// Smallest series length for which at least one indicator computes.
    /// The normalizer rejects anything shorter.
    pub fn min_required_points(&self) -> usize {
        self.rsi_period
            .min(self.macd_slow)
            .min(self.bollinger_period)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rsi_period: Self::DEFAULT_RSI_PERIOD,
            macd_fast: Self::DEFAULT_MACD_FAST,
            macd_slow: Self::DEFAULT_MACD_SLOW,
            macd_signal: Self::DEFAULT_MACD_SIGNAL,
            bollinger_period: Self::DEFAULT_BOLLINGER_PERIOD,
            bollinger_multiplier: Self::DEFAULT_BOLLINGER_MULTIPLIER,
            sentiment_thresholds: SentimentThresholds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        AnalysisConfig::default().validate().expect("must be valid");
    }

    #[test]
    fn rejects_zero_period() {
        let config = AnalysisConfig {
            rsi_period: 0,
            ..AnalysisConfig::default()
        };
        let err = config.validate().expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::ZeroPeriod {
                field: "rsi_period"
            }
        ));
    }

    #[test]
    fn rejects_fast_not_below_slow() {
        let config = AnalysisConfig {
            macd_fast: 26,
            macd_slow: 26,
            ..AnalysisConfig::default()
        };
        let err = config.validate().expect_err("must fail");
        assert!(matches!(err, ValidationError::MacdPeriodOrder { .. }));
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let thresholds = SentimentThresholds {
            positive: -0.1,
            negative: 0.1,
        };
        let err = thresholds.validate().expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::InvalidSentimentThresholds { .. }
        ));
    }

    #[test]
    fn min_required_points_tracks_smallest_window() {
        let config = AnalysisConfig::default();
        assert_eq!(config.min_required_points(), 14);
    }
}
