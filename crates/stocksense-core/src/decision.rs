//! Fusion of indicator state and sentiment polarity into a verdict.
//!
//! A fixed-priority rule table evaluated first-match-wins. Rules that
//! reference an indicator absent from the snapshot are skipped, so
//! missing data can only ever fall through toward HOLD, never produce a
//! BUY or SELL.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{IndicatorSnapshot, SentimentSnapshot};

const RSI_OVERBOUGHT: f64 = 70.0;
const RSI_OVERSOLD: f64 = 30.0;

/// Discrete trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Buy,
    Sell,
    Hold,
}

impl Verdict {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Hold => "HOLD",
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict plus the ordered rationale that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub verdict: Verdict,
    pub rationale: Vec<String>,
}

/// Evaluate the rule table against both snapshots.
///
/// Rule order is the priority order; the first matching rule decides.
pub fn fuse(indicators: &IndicatorSnapshot, sentiment: &SentimentSnapshot) -> Decision {
    let score = sentiment.score;

    // Rule 1: overbought plus negative sentiment.
    if let Some(rsi) = indicators.rsi {
        if rsi > RSI_OVERBOUGHT && score < 0.0 {
            return Decision {
                verdict: Verdict::Sell,
                rationale: vec![
                    String::from("overbought + negative sentiment"),
                    format!("rsi={rsi:.2} above {RSI_OVERBOUGHT}"),
                    format!("sentiment={score:.3}"),
                ],
            };
        }

        // Rule 2: oversold plus positive sentiment.
        if rsi < RSI_OVERSOLD && score > 0.0 {
            return Decision {
                verdict: Verdict::Buy,
                rationale: vec![
                    String::from("oversold + positive sentiment"),
                    format!("rsi={rsi:.2} below {RSI_OVERSOLD}"),
                    format!("sentiment={score:.3}"),
                ],
            };
        }
    }

    if let (Some(macd), Some(bands)) = (indicators.macd, indicators.bollinger) {
        let last_close = indicators.last_close;

        // Rule 3: bullish momentum breakout.
        if macd.histogram > 0.0 && last_close > bands.upper && score >= 0.0 {
            return Decision {
                verdict: Verdict::Buy,
                rationale: vec![
                    String::from("bullish momentum breakout"),
                    format!("macd_histogram={:.4}", macd.histogram),
                    format!("close={last_close:.2} above upper band {:.2}", bands.upper),
                    format!("sentiment={score:.3}"),
                ],
            };
        }

        // Rule 4: bearish momentum breakdown.
        if macd.histogram < 0.0 && last_close < bands.lower && score <= 0.0 {
            return Decision {
                verdict: Verdict::Sell,
                rationale: vec![
                    String::from("bearish momentum breakdown"),
                    format!("macd_histogram={:.4}", macd.histogram),
                    format!("close={last_close:.2} below lower band {:.2}", bands.lower),
                    format!("sentiment={score:.3}"),
                ],
            };
        }
    }

    Decision {
        verdict: Verdict::Hold,
        rationale: vec![String::from("no strong confirming signal")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BollingerBands, Macd};

    fn snapshot(
        rsi: Option<f64>,
        macd: Option<Macd>,
        bollinger: Option<BollingerBands>,
        last_close: f64,
    ) -> IndicatorSnapshot {
        IndicatorSnapshot {
            rsi,
            macd,
            bollinger,
            last_close,
            gaps: Vec::new(),
        }
    }

    fn sentiment(score: f64) -> SentimentSnapshot {
        SentimentSnapshot {
            score,
            item_count: 1,
            positive_count: usize::from(score > 0.0),
            negative_count: usize::from(score < 0.0),
            neutral_count: usize::from(score == 0.0),
        }
    }

    fn bullish_macd() -> Macd {
        Macd {
            line: 1.5,
            signal: 1.0,
            histogram: 0.5,
        }
    }

    fn bands_below(close: f64) -> BollingerBands {
        BollingerBands {
            upper: close - 1.0,
            middle: close - 3.0,
            lower: close - 5.0,
        }
    }

    #[test]
    fn rule_one_outranks_breakout() {
        // MACD/Bollinger would trigger rule 3, but RSI 75 with negative
        // sentiment matches first.
        let indicators = snapshot(
            Some(75.0),
            Some(bullish_macd()),
            Some(bands_below(110.0)),
            110.0,
        );
        let decision = fuse(&indicators, &sentiment(-0.3));
        assert_eq!(decision.verdict, Verdict::Sell);
        assert_eq!(decision.rationale[0], "overbought + negative sentiment");
    }

    #[test]
    fn oversold_with_positive_news_buys() {
        let indicators = snapshot(Some(25.0), None, None, 90.0);
        let decision = fuse(&indicators, &sentiment(0.4));
        assert_eq!(decision.verdict, Verdict::Buy);
        assert_eq!(decision.rationale[0], "oversold + positive sentiment");
    }

    #[test]
    fn breakout_requires_non_negative_sentiment() {
        let indicators = snapshot(
            Some(60.0),
            Some(bullish_macd()),
            Some(bands_below(110.0)),
            110.0,
        );
        assert_eq!(fuse(&indicators, &sentiment(0.0)).verdict, Verdict::Buy);
        assert_eq!(fuse(&indicators, &sentiment(-0.1)).verdict, Verdict::Hold);
    }

    #[test]
    fn breakdown_sells_on_bearish_alignment() {
        let bands = BollingerBands {
            upper: 110.0,
            middle: 105.0,
            lower: 100.0,
        };
        let macd = Macd {
            line: -1.0,
            signal: -0.2,
            histogram: -0.8,
        };
        let indicators = snapshot(Some(45.0), Some(macd), Some(bands), 98.0);
        let decision = fuse(&indicators, &sentiment(-0.2));
        assert_eq!(decision.verdict, Verdict::Sell);
        assert_eq!(decision.rationale[0], "bearish momentum breakdown");
    }

    #[test]
    fn missing_rsi_skips_rsi_rules() {
        // RSI would read overbought, but it is absent; no other rule
        // matches, so the verdict degrades to HOLD.
        let indicators = snapshot(None, None, None, 110.0);
        let decision = fuse(&indicators, &sentiment(-0.5));
        assert_eq!(decision.verdict, Verdict::Hold);
        assert_eq!(decision.rationale, vec!["no strong confirming signal"]);
    }

    #[test]
    fn missing_bollinger_skips_breakout() {
        let indicators = snapshot(Some(60.0), Some(bullish_macd()), None, 110.0);
        let decision = fuse(&indicators, &sentiment(0.5));
        assert_eq!(decision.verdict, Verdict::Hold);
    }

    #[test]
    fn neutral_everything_holds() {
        let bands = BollingerBands {
            upper: 52.0,
            middle: 50.0,
            lower: 48.0,
        };
        let macd = Macd {
            line: 0.0,
            signal: 0.0,
            histogram: 0.0,
        };
        let indicators = snapshot(Some(50.0), Some(macd), Some(bands), 50.0);
        let decision = fuse(&indicators, &sentiment(0.0));
        assert_eq!(decision.verdict, Verdict::Hold);
    }
}
