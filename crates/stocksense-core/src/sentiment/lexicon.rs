use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Valence magnitudes on a [-4, 4] scale, matching the convention of
/// common rule-based sentiment lexicons. Finance-leaning vocabulary with
/// a general-purpose core.
const VALENCES: &[(&str, f64)] = &[
    // General positive.
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("positive", 2.3),
    ("strong", 2.3),
    ("impressive", 2.3),
    ("robust", 2.0),
    ("solid", 1.8),
    ("healthy", 1.7),
    ("optimistic", 1.8),
    ("confident", 2.2),
    ("success", 2.7),
    ("successful", 2.6),
    ("win", 2.8),
    ("winner", 2.8),
    ("best", 3.2),
    // Finance positive.
    ("gain", 2.4),
    ("gains", 2.4),
    ("profit", 2.3),
    ("profits", 2.3),
    ("profitable", 2.4),
    ("growth", 2.2),
    ("grow", 1.9),
    ("growing", 1.9),
    ("rally", 2.1),
    ("rallies", 2.1),
    ("surge", 2.4),
    ("surges", 2.4),
    ("soar", 2.6),
    ("soars", 2.6),
    ("soared", 2.6),
    ("jump", 1.8),
    ("jumps", 1.8),
    ("jumped", 1.8),
    ("climb", 1.6),
    ("climbs", 1.6),
    ("rise", 1.5),
    ("rises", 1.5),
    ("rose", 1.5),
    ("record", 1.9),
    ("beat", 2.0),
    ("beats", 2.0),
    ("upgrade", 2.2),
    ("upgraded", 2.2),
    ("upgrades", 2.2),
    ("outperform", 2.3),
    ("outperforms", 2.3),
    ("bullish", 2.5),
    ("dividend", 1.2),
    ("buyback", 1.5),
    ("expansion", 1.6),
    ("demand", 1.2),
    ("breakthrough", 2.5),
    ("innovative", 2.0),
    ("momentum", 1.4),
    ("recovery", 1.8),
    ("rebound", 1.8),
    ("rebounds", 1.8),
    // General negative.
    ("bad", -2.5),
    ("poor", -2.1),
    ("terrible", -3.1),
    ("negative", -2.3),
    ("weak", -1.9),
    ("worse", -2.6),
    ("worst", -3.1),
    ("disappointing", -2.2),
    ("disappoints", -2.2),
    ("fail", -2.5),
    ("fails", -2.5),
    ("failed", -2.5),
    ("failure", -2.6),
    ("trouble", -2.0),
    ("fear", -2.2),
    ("fears", -2.2),
    ("concern", -1.6),
    ("concerns", -1.6),
    ("uncertain", -1.4),
    ("uncertainty", -1.4),
    ("risk", -1.3),
    ("risks", -1.3),
    ("warning", -1.9),
    ("warns", -1.9),
    ("warned", -1.9),
    // Finance negative.
    ("loss", -2.3),
    ("losses", -2.3),
    ("drop", -1.8),
    ("drops", -1.8),
    ("dropped", -1.8),
    ("fall", -1.7),
    ("falls", -1.7),
    ("fell", -1.7),
    ("decline", -1.8),
    ("declines", -1.8),
    ("declined", -1.8),
    ("plunge", -2.7),
    ("plunges", -2.7),
    ("plunged", -2.7),
    ("tumble", -2.4),
    ("tumbles", -2.4),
    ("crash", -3.2),
    ("crashes", -3.2),
    ("slump", -2.3),
    ("slumps", -2.3),
    ("selloff", -2.2),
    ("miss", -1.9),
    ("misses", -1.9),
    ("missed", -1.9),
    ("downgrade", -2.2),
    ("downgraded", -2.2),
    ("downgrades", -2.2),
    ("underperform", -2.2),
    ("bearish", -2.5),
    ("layoff", -2.3),
    ("layoffs", -2.3),
    ("bankruptcy", -3.4),
    ("bankrupt", -3.3),
    ("fraud", -3.2),
    ("lawsuit", -2.1),
    ("investigation", -1.7),
    ("recall", -1.8),
    ("debt", -1.2),
    ("default", -2.4),
    ("cut", -1.4),
    ("cuts", -1.4),
    ("shortfall", -2.0),
    ("scandal", -2.9),
    ("probe", -1.6),
    ("volatile", -1.2),
];

/// Intensity adjusters applied to a following sentiment-bearing word.
/// Positive values amplify, negative values dampen.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", 0.293),
    ("extremely", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("remarkably", 0.293),
    ("sharply", 0.293),
    ("significantly", 0.293),
    ("strongly", 0.293),
    ("substantially", 0.293),
    ("massively", 0.293),
    ("really", 0.267),
    ("highly", 0.267),
    ("particularly", 0.267),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("marginally", -0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("mildly", -0.293),
    ("partly", -0.267),
    ("modestly", -0.267),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "nothing", "cannot", "without", "isn't",
    "aren't", "wasn't", "weren't", "don't", "doesn't", "didn't", "won't", "wouldn't", "can't",
    "couldn't", "shouldn't", "hasn't", "haven't", "hadn't",
];

/// Fixed valence table with negation and intensifier vocabulary.
///
/// Pure data; scoring rules live in [`crate::sentiment::LexiconScorer`].
pub struct Lexicon {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negators: HashSet<&'static str>,
}

impl Lexicon {
    /// Shared default lexicon, built once per process.
    pub fn default_financial() -> &'static Self {
        static LEXICON: OnceLock<Lexicon> = OnceLock::new();
        LEXICON.get_or_init(|| Self {
            valences: VALENCES.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        })
    }

    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn booster(&self, token: &str) -> Option<f64> {
        self.boosters.get(token).copied()
    }

    pub fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token) || token.ends_with("n't")
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valences_stay_on_scale() {
        let lexicon = Lexicon::default_financial();
        assert!(!lexicon.is_empty());
        for &(word, valence) in VALENCES {
            assert!(
                (-4.0..=4.0).contains(&valence),
                "'{word}' valence {valence} out of scale"
            );
            assert!(valence != 0.0, "'{word}' must carry polarity");
        }
    }

    #[test]
    fn recognizes_contraction_negators() {
        let lexicon = Lexicon::default_financial();
        assert!(lexicon.is_negator("won't"));
        assert!(lexicon.is_negator("shan't"));
        assert!(!lexicon.is_negator("want"));
    }
}
