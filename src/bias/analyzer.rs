// Bias analyzer — composes sentiment, indicators and subjectivity into one
// result and fuses them into the overall bias score.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::indicators::{indicator_count, BiasIndicatorDetector, BiasIndicators};
use super::sentiment::{aggregate, emotional_sentences, score_sentences, EmotionalSentence};
use super::subjectivity::SubjectivityScorer;
use crate::lexicon::Lexicons;
use crate::linguistics::traits::{
    LinguisticToolkit, ParsedDocument, PolarityScores, SentimentAnalyzer,
};
use crate::scoring::overall::{compute_overall_bias, BiasSignals, BiasWeights};

/// Bias and subjectivity profile of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasAnalysisResult {
    /// Mean sentence polarity (all zero for an empty document)
    pub sentiment_scores: PolarityScores,
    pub bias_indicators: BiasIndicators,
    /// Subjective-token ratio in [0, 1]
    pub subjectivity_score: f64,
    pub emotional_language: Vec<EmotionalSentence>,
    /// Fused score in [0, 5]
    pub overall_bias_score: f64,
}

pub struct BiasAnalyzer {
    toolkit: Arc<dyn LinguisticToolkit>,
    sentiment: Arc<dyn SentimentAnalyzer>,
    indicators: BiasIndicatorDetector,
    subjectivity: SubjectivityScorer,
    weights: BiasWeights,
}

impl BiasAnalyzer {
    pub fn new(
        toolkit: Arc<dyn LinguisticToolkit>,
        sentiment: Arc<dyn SentimentAnalyzer>,
        lexicons: Arc<Lexicons>,
    ) -> Self {
        Self {
            toolkit,
            sentiment,
            indicators: BiasIndicatorDetector::new(lexicons.clone()),
            subjectivity: SubjectivityScorer::new(lexicons),
            weights: BiasWeights::default(),
        }
    }

    /// Replace the default score weights.
    pub fn with_weights(mut self, weights: BiasWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn analyze(&self, text: &str) -> BiasAnalysisResult {
        let doc = self.toolkit.parse(text);
        self.analyze_parsed(&doc)
    }

    /// Mean polarity across the sentences of `text`.
    pub fn aggregate_sentiment(&self, text: &str) -> PolarityScores {
        let doc = self.toolkit.parse(text);
        aggregate(&score_sentences(self.sentiment.as_ref(), &doc.sentences))
    }

    /// Analyze an already-parsed document.
    pub fn analyze_parsed(&self, doc: &ParsedDocument) -> BiasAnalysisResult {
        let sentence_scores = score_sentences(self.sentiment.as_ref(), &doc.sentences);
        let sentiment_scores = aggregate(&sentence_scores);
        let bias_indicators = self.indicators.detect(&doc.sentences);
        let subjectivity_score = self.subjectivity.score(&doc.tokens);
        let emotional_language = emotional_sentences(&doc.sentences, &sentence_scores);

        let signals = BiasSignals {
            sentiment_compound: sentiment_scores.compound,
            subjectivity: subjectivity_score,
            emotional_count: emotional_language.len(),
            indicator_count: indicator_count(&bias_indicators),
        };
        let overall_bias_score = compute_overall_bias(&signals, &self.weights);

        debug!(
            sentences = doc.sentences.len(),
            categories = bias_indicators.len(),
            indicator_hits = signals.indicator_count,
            emotional = signals.emotional_count,
            subjectivity = subjectivity_score,
            overall = overall_bias_score,
            "Analyzed bias"
        );

        BiasAnalysisResult {
            sentiment_scores,
            bias_indicators,
            subjectivity_score,
            emotional_language,
            overall_bias_score,
        }
    }
}
