// Bias indicator detection.
//
// Each sentence is lower-cased and checked against seven categories of
// bias-signaling language. Matching is substring containment, so "all" fires
// inside "finally" and "may" inside "mayor".

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::lexicon::{contains_any, Lexicons};

/// Appeals to unnamed authority.
const UNSUBSTANTIATED_CLAIMS: &[&str] = &["studies show", "research shows", "experts say"];

/// Sweeping quantifiers.
const GENERALIZATIONS: &[&str] = &["all", "every", "none", "always", "never"];

/// The seven indicator categories, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasCategory {
    OpinionStatements,
    ExtremeLanguage,
    Hedging,
    EmotionalLanguage,
    LoadedWords,
    UnsubstantiatedClaims,
    Generalizations,
}

impl BiasCategory {
    pub const ALL: [BiasCategory; 7] = [
        Self::OpinionStatements,
        Self::ExtremeLanguage,
        Self::Hedging,
        Self::EmotionalLanguage,
        Self::LoadedWords,
        Self::UnsubstantiatedClaims,
        Self::Generalizations,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::OpinionStatements => "opinion_statements",
            Self::ExtremeLanguage => "extreme_language",
            Self::Hedging => "hedging",
            Self::EmotionalLanguage => "emotional_language",
            Self::LoadedWords => "loaded_words",
            Self::UnsubstantiatedClaims => "unsubstantiated_claims",
            Self::Generalizations => "generalizations",
        }
    }
}

impl fmt::Display for BiasCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category -> triggering sentences. Only categories with hits are present.
pub type BiasIndicators = BTreeMap<BiasCategory, Vec<String>>;

/// Total hits across categories; a sentence counts once per category.
pub fn indicator_count(indicators: &BiasIndicators) -> usize {
    indicators.values().map(Vec::len).sum()
}

/// Lexicon-driven bias indicator detector.
pub struct BiasIndicatorDetector {
    lexicons: Arc<Lexicons>,
    unsubstantiated: Vec<String>,
    generalizations: Vec<String>,
}

impl BiasIndicatorDetector {
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        let owned =
            |terms: &[&str]| -> Vec<String> { terms.iter().map(|t| t.to_string()).collect() };
        Self {
            lexicons,
            unsubstantiated: owned(UNSUBSTANTIATED_CLAIMS),
            generalizations: owned(GENERALIZATIONS),
        }
    }

    fn terms(&self, category: BiasCategory) -> &[String] {
        let bias = &self.lexicons.bias;
        match category {
            BiasCategory::OpinionStatements => &bias.opinion_words,
            BiasCategory::ExtremeLanguage => &bias.extreme_words,
            BiasCategory::Hedging => &bias.hedge_words,
            BiasCategory::EmotionalLanguage => &bias.emotional_words,
            BiasCategory::LoadedWords => &bias.loaded_words,
            BiasCategory::UnsubstantiatedClaims => &self.unsubstantiated,
            BiasCategory::Generalizations => &self.generalizations,
        }
    }

    /// Categories a single sentence triggers.
    pub fn categories_for(&self, sentence: &str) -> Vec<BiasCategory> {
        let lower = sentence.trim().to_lowercase();
        BiasCategory::ALL
            .into_iter()
            .filter(|&c| contains_any(&lower, self.terms(c)))
            .collect()
    }

    /// Map each triggered category to its sentences, in document order.
    pub fn detect(&self, sentences: &[String]) -> BiasIndicators {
        let mut indicators = BiasIndicators::new();
        for sentence in sentences {
            for category in self.categories_for(sentence) {
                indicators
                    .entry(category)
                    .or_default()
                    .push(sentence.trim().to_string());
            }
        }
        indicators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> BiasIndicatorDetector {
        BiasIndicatorDetector::new(Arc::new(Lexicons::default()))
    }

    #[test]
    fn test_neutral_sentence_triggers_nothing() {
        assert!(detector().categories_for("The bridge opened on Tuesday.").is_empty());
    }

    #[test]
    fn test_substring_false_positive_is_kept() {
        // "all" inside "finally" counts as a generalization
        let cats = detector().categories_for("The bridge finally opened.");
        assert!(cats.contains(&BiasCategory::Generalizations));
        assert!(cats.contains(&BiasCategory::ExtremeLanguage));
    }

    #[test]
    fn test_empty_categories_are_omitted() {
        let indicators = detector().detect(&["Experts say the plan works.".to_string()]);
        assert_eq!(indicators.len(), 1);
        assert!(indicators.contains_key(&BiasCategory::UnsubstantiatedClaims));
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&BiasCategory::UnsubstantiatedClaims).unwrap();
        assert_eq!(json, "\"unsubstantiated_claims\"");
    }
}
