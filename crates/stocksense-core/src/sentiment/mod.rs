//! Lexicon-based news sentiment scoring and aggregation.
//!
//! Deterministic given the lexicon: no model weights, no training, no
//! network calls. The scorer is a swappable strategy so an alternative
//! implementation can be substituted without touching decision fusion.

mod lexicon;
mod scorer;

pub use lexicon::Lexicon;
pub use scorer::{LexiconScorer, SentimentScorer};

use serde::{Deserialize, Serialize};

use crate::{NewsItem, SentimentThresholds};

/// Aggregated sentiment over one batch of news items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    /// Mean per-item polarity in [-1, 1].
    pub score: f64,
    pub item_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
}

impl SentimentSnapshot {
    /// Neutral default for an empty news batch. Not an error: absence of
    /// news is ordinary for thinly covered tickers.
    pub const fn neutral() -> Self {
        Self {
            score: 0.0,
            item_count: 0,
            positive_count: 0,
            negative_count: 0,
            neutral_count: 0,
        }
    }

    /// Score and classify each item, then reduce to the mean.
    ///
    /// Per-item scores are sorted before summation so the aggregate is
    /// bit-identical under any permutation of the input batch.
    pub fn aggregate(
        items: &[NewsItem],
        scorer: &dyn SentimentScorer,
        thresholds: &SentimentThresholds,
    ) -> Self {
        if items.is_empty() {
            return Self::neutral();
        }

        let mut scores: Vec<f64> = items.iter().map(|item| scorer.score(&item.text)).collect();

        let mut positive_count = 0;
        let mut negative_count = 0;
        let mut neutral_count = 0;
        for &score in &scores {
            if score > thresholds.positive {
                positive_count += 1;
            } else if score < thresholds.negative {
                negative_count += 1;
            } else {
                neutral_count += 1;
            }
        }

        scores.sort_by(f64::total_cmp);
        let score = scores.iter().sum::<f64>() / scores.len() as f64;

        Self {
            score,
            item_count: items.len(),
            positive_count,
            negative_count,
            neutral_count,
        }
    }
}
