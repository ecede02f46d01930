// Four-signal keyword extractor.
//
// Candidates come from four independent sources over one parse of the text:
//   noun-phrase chunks (+2), named entities (+2), the top TF-IDF terms (+3)
//   and content words tagged NOUN/PROPN/ADJ that are not stop words (+1).
// Scores add up when a candidate appears in several sources. Candidates of
// two characters or fewer, purely numeric, or made only of punctuation are
// dropped before scoring.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tfidf::SentenceTfIdf;
use super::traits::KeywordExtractor;
use crate::linguistics::traits::{LinguisticToolkit, ParsedDocument};

/// Size of the surfaced keyword list.
pub const MAX_KEYWORDS: usize = 5;
/// TF-IDF terms that count as "top" terms.
pub const TFIDF_TOP_N: usize = 10;

const NOUN_PHRASE_SCORE: u32 = 2;
const ENTITY_SCORE: u32 = 2;
const TFIDF_SCORE: u32 = 3;
const IMPORTANT_WORD_SCORE: u32 = 1;

/// Content words shorter than this are not considered important.
const MIN_IMPORTANT_WORD_CHARS: usize = 3;

/// A scored keyword candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    pub score: u32,
}

/// The four candidate sources, lower-cased.
#[derive(Debug, Default)]
struct CandidateSets {
    noun_phrases: HashSet<String>,
    entities: HashSet<String>,
    top_tfidf: HashSet<String>,
    important_words: HashSet<String>,
}

impl CandidateSets {
    fn score(&self, keyword: &str) -> u32 {
        let mut score = 0;
        if self.noun_phrases.contains(keyword) {
            score += NOUN_PHRASE_SCORE;
        }
        if self.entities.contains(keyword) {
            score += ENTITY_SCORE;
        }
        if self.top_tfidf.contains(keyword) {
            score += TFIDF_SCORE;
        }
        if self.important_words.contains(keyword) {
            score += IMPORTANT_WORD_SCORE;
        }
        score
    }

    /// Union of all sources, cleaned and filtered, in a stable order.
    fn candidates(&self) -> BTreeSet<String> {
        self.noun_phrases
            .iter()
            .chain(&self.entities)
            .chain(&self.top_tfidf)
            .chain(&self.important_words)
            .map(|k| k.trim().to_string())
            .filter(|k| is_valid_keyword(k))
            .collect()
    }
}

/// Rejects short, numeric and punctuation-only candidates.
fn is_valid_keyword(keyword: &str) -> bool {
    keyword.chars().count() > 2
        && !keyword.chars().all(char::is_numeric)
        && !keyword.chars().all(|c| c.is_ascii_punctuation())
}

/// The default [`KeywordExtractor`].
pub struct CompositeKeywordExtractor {
    toolkit: Arc<dyn LinguisticToolkit>,
    tfidf: SentenceTfIdf,
    /// How many keywords to surface (default 5)
    pub max_keywords: usize,
}

impl CompositeKeywordExtractor {
    /// Extractor with the English stop-word TF-IDF ranker.
    pub fn new(toolkit: Arc<dyn LinguisticToolkit>) -> Result<Self> {
        Ok(Self::with_tfidf(toolkit, SentenceTfIdf::new(TFIDF_TOP_N)?))
    }

    pub fn with_tfidf(toolkit: Arc<dyn LinguisticToolkit>, tfidf: SentenceTfIdf) -> Self {
        Self {
            toolkit,
            tfidf,
            max_keywords: MAX_KEYWORDS,
        }
    }

    fn candidate_sets(&self, doc: &ParsedDocument) -> CandidateSets {
        let lower_all = |spans: &[String]| -> HashSet<String> {
            spans.iter().map(|s| s.to_lowercase()).collect()
        };

        CandidateSets {
            noun_phrases: lower_all(&doc.noun_chunks),
            entities: lower_all(&doc.entities),
            top_tfidf: self.tfidf.top_terms(&doc.sentences).into_iter().collect(),
            important_words: doc
                .tokens
                .iter()
                .filter(|t| {
                    !t.is_stop
                        && !t.is_punct
                        && t.pos.is_keyword_tag()
                        && t.text.chars().count() >= MIN_IMPORTANT_WORD_CHARS
                })
                .map(|t| t.text.to_lowercase())
                .collect(),
        }
    }

    /// Every surviving candidate with its score, best first.
    ///
    /// Equal scores keep the candidates' alphabetical order.
    pub fn rank(&self, doc: &ParsedDocument) -> Vec<Keyword> {
        if doc.sentences.is_empty() {
            return Vec::new();
        }

        let sets = self.candidate_sets(doc);
        let mut ranked: Vec<Keyword> = sets
            .candidates()
            .into_iter()
            .map(|text| {
                let score = sets.score(&text);
                Keyword { text, score }
            })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            candidates = ranked.len(),
            noun_phrases = sets.noun_phrases.len(),
            entities = sets.entities.len(),
            tfidf_terms = sets.top_tfidf.len(),
            important_words = sets.important_words.len(),
            "Ranked keyword candidates"
        );

        ranked
    }

    /// The top keywords of an already-parsed document.
    pub fn extract_from(&self, doc: &ParsedDocument) -> Vec<String> {
        self.rank(doc)
            .into_iter()
            .take(self.max_keywords)
            .map(|k| k.text)
            .collect()
    }
}

impl KeywordExtractor for CompositeKeywordExtractor {
    fn extract_keywords(&self, text: &str) -> Vec<String> {
        let doc = self.toolkit.parse(text);
        self.extract_from(&doc)
    }
}
