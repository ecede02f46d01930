// Linguistic capability traits — the swap-ready seam between text and scoring.
//
// A toolkit parses a document once into sentences, tagged tokens, noun
// chunks and entity spans. A sentiment analyzer scores one sentence at a time.
// Both are constructed once at startup and shared read-only, so they must be
// Send + Sync.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tags (universal tag set subset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Adjective,
    Adverb,
    Verb,
    Auxiliary,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Other,
}

impl PartOfSpeech {
    /// Content-word tags eligible as keyword candidates.
    pub fn is_keyword_tag(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun | Self::Adjective)
    }

    /// Tags that mark a token as subjective on their own.
    pub fn is_modifier(self) -> bool {
        matches!(self, Self::Adjective | Self::Adverb)
    }
}

/// A word-level unit. Lives only as long as one analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub is_stop: bool,
    pub is_punct: bool,
}

/// Everything the analyzers need from one parse of a document.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// Sentence texts, trimmed, in document order
    pub sentences: Vec<String>,
    /// All tokens across all sentences, in document order
    pub tokens: Vec<Token>,
    /// Noun-phrase chunk texts with original casing
    pub noun_chunks: Vec<String>,
    /// Named-entity span texts with original casing
    pub entities: Vec<String>,
}

/// Sentence segmentation, tagging, chunking and entity recognition.
pub trait LinguisticToolkit: Send + Sync {
    fn parse(&self, text: &str) -> ParsedDocument;
}

/// Four-component polarity score for one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Normalized overall polarity in [-1, 1]
    pub compound: f64,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
}

/// Per-sentence sentiment polarity.
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity_scores(&self, sentence: &str) -> PolarityScores;
}
