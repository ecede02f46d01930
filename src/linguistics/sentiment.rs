// Valence-lexicon sentiment scorer.
//
// Each word found in the valence lexicon contributes its valence, adjusted by
// boosters/dampeners in the three preceding words and flipped-and-damped by a
// preceding negation. A "but" halves what comes before it and amplifies what
// follows. Exclamation marks push the total further from zero. The summed
// valence is squashed into [-1, 1] as the compound score; pos/neg/neu are the
// proportions of positive, negative and neutral mass in the sentence.

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::traits::{PolarityScores, SentimentAnalyzer};
use crate::scoring::safe_ratio;

const DEFAULT_SENTIMENT_LEXICON: &str = include_str!("../../data/sentiment_lexicon.json");

/// Multiplier applied to a valence preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;
/// Controls how fast the compound score approaches +/-1.
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Added per exclamation mark, up to `MAX_EXCLAMATIONS`.
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Booster effect decays with distance from the scored word.
const BOOSTER_DECAY: [f64; 3] = [1.0, 0.95, 0.9];
/// Suffix rewrites tried, in order, for words missing from the lexicon.
const INFLECTIONS: &[(&str, &str)] = &[
    ("s", ""),
    ("es", ""),
    ("ed", ""),
    ("ed", "e"),
    ("ing", ""),
    ("ing", "e"),
];
/// Shortest stem an inflection may leave behind.
const MIN_STEM_LEN: usize = 3;

/// On-disk shape of the sentiment lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentLexiconDocument {
    pub version: u32,
    pub valence: HashMap<String, f64>,
    pub boosters: HashMap<String, f64>,
    pub negations: Vec<String>,
}

/// Lexicon-driven implementation of [`SentimentAnalyzer`].
pub struct LexiconSentiment {
    valence: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        // Embedded at compile time and covered by tests.
        Self::from_json(DEFAULT_SENTIMENT_LEXICON).unwrap_or_else(|e| {
            panic!("embedded sentiment lexicon is invalid: {e:#}")
        })
    }
}

impl LexiconSentiment {
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: SentimentLexiconDocument =
            serde_json::from_str(json).context("Failed to parse sentiment lexicon")?;
        Ok(Self::from_document(doc))
    }

    pub fn from_document(doc: SentimentLexiconDocument) -> Self {
        let lower_keys = |map: HashMap<String, f64>| {
            map.into_iter()
                .map(|(k, v)| (k.trim().to_lowercase(), v))
                .collect::<HashMap<_, _>>()
        };
        Self {
            valence: lower_keys(doc.valence),
            boosters: lower_keys(doc.boosters),
            negations: doc
                .negations
                .into_iter()
                .map(|n| n.trim().to_lowercase())
                .collect(),
        }
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    /// Valence of `word`, falling back to its base form ("condemns" -> "condemn").
    fn lookup(&self, word: &str) -> Option<f64> {
        if let Some(&v) = self.valence.get(word) {
            return Some(v);
        }
        INFLECTIONS.iter().find_map(|&(suffix, replacement)| {
            let stem = word.strip_suffix(suffix)?;
            if stem.chars().count() < MIN_STEM_LEN {
                return None;
            }
            self.valence.get(&format!("{stem}{replacement}")).copied()
        })
    }

    fn word_valence(&self, words: &[String], i: usize) -> f64 {
        let Some(base) = self.lookup(&words[i]) else {
            return 0.0;
        };

        let mut valence = base;
        let preceding = words[..i].iter().rev().take(BOOSTER_DECAY.len());
        for (distance, prev) in preceding.clone().enumerate() {
            if let Some(&boost) = self.boosters.get(prev) {
                let scaled = boost * BOOSTER_DECAY[distance];
                valence += if valence > 0.0 { scaled } else { -scaled };
            }
        }

        if preceding.into_iter().any(|w| self.is_negation(w)) {
            valence *= NEGATION_SCALAR;
        }
        valence
    }
}

impl SentimentAnalyzer for LexiconSentiment {
    fn polarity_scores(&self, sentence: &str) -> PolarityScores {
        let words: Vec<String> = sentence
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
                    .replace('’', "'")
            })
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return PolarityScores::default();
        }

        let mut sentiments: Vec<f64> = (0..words.len())
            .map(|i| self.word_valence(&words, i))
            .collect();

        if let Some(but_idx) = words.iter().position(|w| w == "but") {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < but_idx {
                    *s *= 0.5;
                } else if i > but_idx {
                    *s *= 1.5;
                }
            }
        }

        let emphasis =
            sentence.matches('!').count().min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_BOOST;

        let mut total: f64 = sentiments.iter().sum();
        if total > 0.0 {
            total += emphasis;
        } else if total < 0.0 {
            total -= emphasis;
        }
        let compound = normalize(total);

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0usize;
        for &s in &sentiments {
            if s > 0.0 {
                pos_sum += s + 1.0;
            } else if s < 0.0 {
                neg_sum += 1.0 - s;
            } else {
                neu_count += 1;
            }
        }
        if pos_sum > neg_sum {
            pos_sum += emphasis;
        } else if neg_sum > pos_sum {
            neg_sum += emphasis;
        }

        let mass = pos_sum + neg_sum + neu_count as f64;
        PolarityScores {
            compound,
            pos: safe_ratio(pos_sum, mass),
            neg: safe_ratio(neg_sum, mass),
            neu: safe_ratio(neu_count as f64, mass),
        }
    }
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}
