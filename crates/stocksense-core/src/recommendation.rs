//! Recommendation assembly: the single entry point tying normalization,
//! indicators, sentiment, and decision fusion together.

use serde::{Deserialize, Serialize};

use crate::decision::{self, Verdict};
use crate::sentiment::{LexiconScorer, SentimentScorer, SentimentSnapshot};
use crate::{
    normalize_series, AnalysisConfig, AnalysisError, IndicatorSnapshot, NewsItem, PricePoint,
    Symbol, UtcDateTime, ValidationError,
};

/// Final immutable result of one analysis request.
///
/// A pure function of its inputs: identical price history, news batch,
/// and config always produce an identical recommendation. `as_of` is the
/// timestamp of the latest price point, never the wall clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub symbol: Symbol,
    pub verdict: Verdict,
    pub rationale: Vec<String>,
    pub indicators: IndicatorSnapshot,
    pub sentiment: SentimentSnapshot,
    pub as_of: UtcDateTime,
}

/// Reusable analysis pipeline with a validated config and a pluggable
/// sentiment scorer.
pub struct Analyzer {
    config: AnalysisConfig,
    scorer: Box<dyn SentimentScorer>,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            config,
            scorer: Box::new(LexiconScorer::default()),
        })
    }

    /// Substitute an alternative scorer; the rest of the pipeline is
    /// unaffected.
    pub fn with_scorer(mut self, scorer: Box<dyn SentimentScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the full pipeline: normalize -> indicators -> sentiment ->
    /// fuse -> assemble.
    ///
    /// Indicator computation and sentiment aggregation are independent;
    /// only fusion needs both. Everything is synchronous and pure.
    pub fn recommend(
        &self,
        symbol: Symbol,
        price_history: Vec<PricePoint>,
        news_items: &[NewsItem],
    ) -> Result<Recommendation, AnalysisError> {
        let series = normalize_series(price_history, self.config.min_required_points())?;

        let indicators = IndicatorSnapshot::compute(&series, &self.config);
        let sentiment = SentimentSnapshot::aggregate(
            news_items,
            self.scorer.as_ref(),
            &self.config.sentiment_thresholds,
        );

        let decision = decision::fuse(&indicators, &sentiment);
        let as_of = series
            .last_timestamp()
            .expect("normalized series is non-empty");

        Ok(Recommendation {
            symbol,
            verdict: decision.verdict,
            rationale: decision.rationale,
            indicators,
            sentiment,
            as_of,
        })
    }
}

/// Convenience entry point over a default [`Analyzer`].
pub fn compute_recommendation(
    symbol: Symbol,
    price_history: Vec<PricePoint>,
    news_items: &[NewsItem],
    config: &AnalysisConfig,
) -> Result<Recommendation, AnalysisError> {
    let analyzer = Analyzer::new(config.clone())?;
    analyzer.recommend(symbol, price_history, news_items)
}
