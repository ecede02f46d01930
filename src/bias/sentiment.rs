// Sentence sentiment aggregation and emotional-language detection.

use serde::{Deserialize, Serialize};

use crate::linguistics::traits::{PolarityScores, SentimentAnalyzer};
use crate::scoring::mean;

/// Sentences whose |compound| exceeds this are reported as emotional.
pub const EMOTIONAL_THRESHOLD: f64 = 0.5;

/// A sentence flagged as emotionally charged, with its compound polarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalSentence {
    pub text: String,
    pub intensity: f64,
}

/// Mean of each polarity component across sentences.
///
/// With no sentences every component is 0.0.
pub fn aggregate(scores: &[PolarityScores]) -> PolarityScores {
    let component = |f: fn(&PolarityScores) -> f64| {
        mean(&scores.iter().map(f).collect::<Vec<_>>())
    };

    PolarityScores {
        compound: component(|s| s.compound),
        pos: component(|s| s.pos),
        neg: component(|s| s.neg),
        neu: component(|s| s.neu),
    }
}

/// Score every sentence once, in order.
pub fn score_sentences(analyzer: &dyn SentimentAnalyzer, sentences: &[String]) -> Vec<PolarityScores> {
    sentences
        .iter()
        .map(|s| analyzer.polarity_scores(s))
        .collect()
}

/// Sentences with |compound| above [`EMOTIONAL_THRESHOLD`], in document order.
pub fn emotional_sentences(sentences: &[String], scores: &[PolarityScores]) -> Vec<EmotionalSentence> {
    sentences
        .iter()
        .zip(scores)
        .filter(|(_, s)| s.compound.abs() > EMOTIONAL_THRESHOLD)
        .map(|(text, s)| EmotionalSentence {
            text: text.clone(),
            intensity: s.compound,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polarity(compound: f64, pos: f64, neg: f64, neu: f64) -> PolarityScores {
        PolarityScores { compound, pos, neg, neu }
    }

    #[test]
    fn test_aggregate_means_each_component() {
        let avg = aggregate(&[polarity(0.6, 0.5, 0.0, 0.5), polarity(-0.2, 0.1, 0.3, 0.6)]);
        assert!((avg.compound - 0.2).abs() < 1e-9);
        assert!((avg.pos - 0.3).abs() < 1e-9);
        assert!((avg.neg - 0.15).abs() < 1e-9);
        assert!((avg.neu - 0.55).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        assert_eq!(aggregate(&[]), PolarityScores::default());
    }

    #[test]
    fn test_emotional_threshold_is_strict() {
        let sentences = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let scores = [
            polarity(0.5, 0.0, 0.0, 1.0),
            polarity(-0.51, 0.0, 0.0, 1.0),
            polarity(0.9, 0.0, 0.0, 1.0),
        ];
        let emotional = emotional_sentences(&sentences, &scores);
        assert_eq!(emotional.len(), 2);
        assert_eq!(emotional[0].text, "b");
        assert_eq!(emotional[0].intensity, -0.51);
        assert_eq!(emotional[1].text, "c");
    }
}
