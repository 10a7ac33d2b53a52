use super::Lexicon;

/// Per-item polarity scorer. Implementations must be pure: the same text
/// always yields the same score in [-1, 1].
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// Scaling applied to a valence governed by a preceding negator.
const NEGATION_SCALAR: f64 = -0.74;

/// Distance damping for intensifiers: full effect one token away,
/// tapering over the lookback window.
const BOOSTER_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];

/// How many preceding tokens are inspected for negators and boosters.
const LOOKBACK: usize = 3;

/// Normalization constant mapping an unbounded valence sum into [-1, 1]
/// via `s / sqrt(s^2 + alpha)`.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Rule-based scorer over a fixed valence lexicon.
///
/// Tokenizes to lowercase words (apostrophes preserved for
/// contractions), adjusts each lexicon hit for preceding intensifiers
/// and negations, and normalizes the sum to a compound score.
pub struct LexiconScorer {
    lexicon: &'static Lexicon,
}

impl LexiconScorer {
    pub fn new(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(Lexicon::default_financial())
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);

        let mut total = 0.0;
        for (index, token) in tokens.iter().enumerate() {
            let Some(base) = self.lexicon.valence(token) else {
                continue;
            };

            let mut valence = base;
            for offset in 1..=LOOKBACK.min(index) {
                let preceding = tokens[index - offset].as_str();

                if let Some(boost) = self.lexicon.booster(preceding) {
                    let damped = boost * BOOSTER_DAMPING[offset - 1];
                    valence += damped * valence.signum();
                }

                if self.lexicon.is_negator(preceding) {
                    valence *= NEGATION_SCALAR;
                }
            }

            total += valence;
        }

        normalize(total)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|ch| ch.is_alphanumeric() || *ch == '\'')
                .flat_map(|ch| ch.to_lowercase())
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn normalize(total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    (total / (total * total + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconScorer::default().score(text)
    }

    #[test]
    fn neutral_text_scores_zero() {
        assert_eq!(score("The board meets on Tuesday"), 0.0);
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn positive_headline_scores_positive() {
        assert!(score("Shares surge on record profit") > 0.05);
    }

    #[test]
    fn negative_headline_scores_negative() {
        assert!(score("Stock plunges after earnings miss") < -0.05);
    }

    #[test]
    fn negation_flips_polarity() {
        let plain = score("The outlook is strong");
        let negated = score("The outlook is not strong");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        assert!(negated.abs() < plain.abs());
    }

    #[test]
    fn intensifier_amplifies_magnitude() {
        let plain = score("Results were weak");
        let boosted = score("Results were extremely weak");
        assert!(boosted < plain, "boosted {boosted} vs plain {plain}");
    }

    #[test]
    fn dampener_reduces_magnitude() {
        let plain = score("Results were weak");
        let dampened = score("Results were slightly weak");
        assert!(dampened > plain);
        assert!(dampened < 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "Very strong rally, but lawsuit fears linger";
        assert_eq!(score(text).to_bits(), score(text).to_bits());
    }

    #[test]
    fn score_stays_within_unit_interval() {
        let text = "surge surge surge surge surge surge surge surge surge surge";
        let value = score(text);
        assert!((-1.0..=1.0).contains(&value));
        assert!(value > 0.9);
    }

    #[test]
    fn tokenizer_strips_punctuation_keeps_contractions() {
        let tokens = tokenize("Won't miss: profits, (really)!");
        assert_eq!(tokens, vec!["won't", "miss", "profits", "really"]);
    }
}
