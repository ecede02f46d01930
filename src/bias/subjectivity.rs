// Subjectivity ratio — how much of a document is opinion-bearing.
//
// A token is subjective when it is tagged as an adjective or adverb, or when
// its lemma is in the opinion or extreme word lexicons. The ratio is taken
// over non-punctuation tokens.

use std::collections::HashSet;
use std::sync::Arc;

use crate::lexicon::Lexicons;
use crate::linguistics::traits::Token;
use crate::scoring::safe_ratio;

pub struct SubjectivityScorer {
    subjective_lemmas: HashSet<String>,
}

impl SubjectivityScorer {
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        let bias = &lexicons.bias;
        let subjective_lemmas = bias
            .opinion_words
            .iter()
            .chain(&bias.extreme_words)
            .cloned()
            .collect();
        Self { subjective_lemmas }
    }

    pub fn is_subjective(&self, token: &Token) -> bool {
        token.pos.is_modifier() || self.subjective_lemmas.contains(&token.lemma)
    }

    /// Fraction of non-punctuation tokens that are subjective, in [0, 1].
    pub fn score(&self, tokens: &[Token]) -> f64 {
        let words = tokens.iter().filter(|t| !t.is_punct);
        let total = words.clone().count();
        let subjective = words.filter(|t| self.is_subjective(t)).count();
        safe_ratio(subjective as f64, total as f64)
    }
}
