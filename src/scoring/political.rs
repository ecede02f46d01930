// Political leaning scorer.
//
// Matches partisan vocabulary and per-issue framing phrases against the whole
// lower-cased document. Terms score 1.0, phrases 1.5, framing hits 1.0. The
// two raw scores are normalized to percentages of their sum and mapped onto
// a five-step label.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{round2, safe_ratio};
use crate::lexicon::{Lexicons, PartisanTerms};

const TERM_WEIGHT: f64 = 1.0;
const PHRASE_WEIGHT: f64 = 1.5;
const FRAMING_WEIGHT: f64 = 1.0;
/// A winning share above this percentage is "Strong", otherwise "Moderate".
const STRONG_THRESHOLD: f64 = 70.0;

/// Categorical political leaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leaning {
    #[serde(rename = "Strong Left")]
    StrongLeft,
    #[serde(rename = "Moderate Left")]
    ModerateLeft,
    #[serde(rename = "Neutral/Centrist")]
    Neutral,
    #[serde(rename = "Moderate Right")]
    ModerateRight,
    #[serde(rename = "Strong Right")]
    StrongRight,
}

impl Leaning {
    /// Pick the label from the two percentages. Ties (including 0/0) are neutral.
    pub fn from_percentages(left: f64, right: f64) -> Self {
        if left > right {
            if left > STRONG_THRESHOLD {
                Self::StrongLeft
            } else {
                Self::ModerateLeft
            }
        } else if right > left {
            if right > STRONG_THRESHOLD {
                Self::StrongRight
            } else {
                Self::ModerateRight
            }
        } else {
            Self::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StrongLeft => "Strong Left",
            Self::ModerateLeft => "Moderate Left",
            Self::Neutral => "Neutral/Centrist",
            Self::ModerateRight => "Moderate Right",
            Self::StrongRight => "Strong Right",
        }
    }
}

impl fmt::Display for Leaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The matched terms behind each direction's score, deduplicated and sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoliticalEvidence {
    pub left_indicators: Vec<String>,
    pub right_indicators: Vec<String>,
}

/// Result of scoring one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoliticalAnalysisResult {
    pub leaning: Leaning,
    /// Raw accumulated left score
    pub left_score: f64,
    /// Raw accumulated right score
    pub right_score: f64,
    /// Share of the total (0-100, two decimals); 0 when nothing matched
    pub left_percentage: f64,
    pub right_percentage: f64,
    pub evidence: PoliticalEvidence,
}

/// Accumulates one direction's score and evidence.
#[derive(Default)]
struct DirectionTally {
    score: f64,
    evidence: BTreeSet<String>,
}

impl DirectionTally {
    fn match_vocabulary(&mut self, text: &str, vocabulary: &PartisanTerms) {
        for term in vocabulary.terms.iter().filter(|t| text.contains(t.as_str())) {
            self.score += TERM_WEIGHT;
            self.evidence.insert(term.clone());
        }
        for phrase in vocabulary.phrases.iter().filter(|p| text.contains(p.as_str())) {
            self.score += PHRASE_WEIGHT;
            self.evidence.insert(phrase.clone());
        }
    }

    fn match_framing(&mut self, text: &str, issue: &str, patterns: &[String]) {
        for pattern in patterns.iter().filter(|p| text.contains(p.as_str())) {
            self.score += FRAMING_WEIGHT;
            self.evidence.insert(format!("{issue}: {pattern}"));
        }
    }
}

/// Lexicon- and framing-based left/right scorer.
pub struct PoliticalLeaningScorer {
    lexicons: Arc<Lexicons>,
}

impl PoliticalLeaningScorer {
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self { lexicons }
    }

    /// Score a document's political leaning.
    pub fn score(&self, text: &str) -> PoliticalAnalysisResult {
        let lower = text.to_lowercase();
        let mut left = DirectionTally::default();
        let mut right = DirectionTally::default();

        left.match_vocabulary(&lower, &self.lexicons.political.left);
        right.match_vocabulary(&lower, &self.lexicons.political.right);

        for pattern in &self.lexicons.framing {
            left.match_framing(&lower, &pattern.issue, &pattern.left);
            right.match_framing(&lower, &pattern.issue, &pattern.right);
        }

        let total = left.score + right.score;
        let left_percentage = safe_ratio(left.score, total) * 100.0;
        let right_percentage = safe_ratio(right.score, total) * 100.0;
        let leaning = Leaning::from_percentages(left_percentage, right_percentage);

        debug!(
            left_score = left.score,
            right_score = right.score,
            leaning = %leaning,
            "Scored political leaning"
        );

        PoliticalAnalysisResult {
            leaning,
            left_score: left.score,
            right_score: right.score,
            left_percentage: round2(left_percentage),
            right_percentage: round2(right_percentage),
            evidence: PoliticalEvidence {
                left_indicators: left.evidence.into_iter().collect(),
                right_indicators: right.evidence.into_iter().collect(),
            },
        }
    }
}
