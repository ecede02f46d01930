// TF-IDF term ranking over the sentences of one article.
//
// Uses the `keyword_extraction` crate with each sentence as a separate
// document, so terms concentrated in a few sentences outrank terms spread
// evenly across the article. Sentences are pre-processed here: lower-cased,
// split into word runs of two or more characters, stripped of English stop
// words, and extended with adjacent-word bigrams (joined with '_' so the
// scorer treats each bigram as one term).

use std::cmp::Ordering;
use std::collections::HashSet;

use anyhow::{Context, Result};
use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use tracing::debug;

/// Word runs of at least two characters.
const TERM_PATTERN: &str = r"[0-9A-Za-z_À-ÖØ-öø-ÿ]{2,}";
const BIGRAM_JOINER: &str = "_";

/// Sentence-level TF-IDF ranker for unigrams and bigrams.
pub struct SentenceTfIdf {
    /// How many top-ranked terms `top_terms` returns
    pub top_n: usize,
    term_pattern: Regex,
    stop_words: HashSet<String>,
}

impl SentenceTfIdf {
    /// Ranker with the English stop-word list.
    pub fn new(top_n: usize) -> Result<Self> {
        Self::with_stop_words(top_n, get(LANGUAGE::English))
    }

    pub fn with_stop_words(top_n: usize, stop_words: Vec<String>) -> Result<Self> {
        let term_pattern = Regex::new(TERM_PATTERN).context("Failed to compile term pattern")?;
        Ok(Self {
            top_n,
            term_pattern,
            stop_words: stop_words.into_iter().map(|w| w.to_lowercase()).collect(),
        })
    }

    /// Unigrams and bigrams of one sentence, stop words removed first.
    fn sentence_terms(&self, sentence: &str) -> Vec<String> {
        let lower = sentence.to_lowercase();
        let unigrams: Vec<&str> = self
            .term_pattern
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        let bigrams = unigrams
            .windows(2)
            .map(|pair| format!("{}{BIGRAM_JOINER}{}", pair[0], pair[1]));

        unigrams
            .iter()
            .map(|t| t.to_string())
            .chain(bigrams)
            .collect()
    }

    /// Every term with its score, best first. Ties are ordered alphabetically.
    ///
    /// Returns an empty list when there are no sentences or no terms survive
    /// stop-word removal.
    pub fn ranked_terms(&self, sentences: &[String]) -> Vec<(String, f32)> {
        let documents: Vec<String> = sentences
            .iter()
            .map(|s| self.sentence_terms(s).join(" "))
            .collect();

        let vocabulary: HashSet<&str> = documents
            .iter()
            .flat_map(|d| d.split_whitespace())
            .collect();
        if vocabulary.is_empty() {
            return Vec::new();
        }

        let tfidf = TfIdf::new(TfIdfParams::ProcessedDocuments(&documents));
        let mut ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(vocabulary.len());

        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        debug!(
            sentences = sentences.len(),
            terms = ranked.len(),
            "Ranked sentence TF-IDF terms"
        );

        ranked
            .into_iter()
            .map(|(term, score)| (term.replace(BIGRAM_JOINER, " "), score))
            .collect()
    }

    /// The `top_n` highest-ranked terms.
    pub fn top_terms(&self, sentences: &[String]) -> Vec<String> {
        self.ranked_terms(sentences)
            .into_iter()
            .take(self.top_n)
            .map(|(term, _)| term)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranker(top_n: usize) -> SentenceTfIdf {
        SentenceTfIdf::with_stop_words(
            top_n,
            ["the", "and", "is", "for", "we", "a", "of", "to", "in"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_sentence_terms_drop_stop_words_before_bigrams() {
        let terms = ranker(10).sentence_terms("Tax cuts for job creators");
        assert_eq!(
            terms,
            vec!["tax", "cuts", "job", "creators", "tax_cuts", "cuts_job", "job_creators"]
        );
    }

    #[test]
    fn test_english_stop_words_keep_content_words() {
        let ranker = SentenceTfIdf::new(10).unwrap();
        let terms = ranker.sentence_terms("The economy is doing great and we need tax cuts");
        assert_eq!(
            terms,
            vec![
                "economy",
                "great",
                "need",
                "tax",
                "cuts",
                "economy_great",
                "great_need",
                "need_tax",
                "tax_cuts"
            ]
        );
    }

    #[test]
    fn test_single_character_words_are_ignored() {
        let terms = ranker(10).sentence_terms("I x y");
        assert!(terms.is_empty());
    }

    #[test]
    fn test_empty_sentences_yield_nothing() {
        assert!(ranker(10).top_terms(&[]).is_empty());
        assert!(ranker(10)
            .top_terms(&["the and is".to_string()])
            .is_empty());
    }

    #[test]
    fn test_top_terms_respects_limit_and_restores_bigrams() {
        let sentences = vec![
            "Congress passed the budget bill after a long debate".to_string(),
            "The budget bill raises spending on schools and roads".to_string(),
            "Critics of the budget bill warned about rising deficits".to_string(),
        ];
        let top = ranker(4).top_terms(&sentences);
        assert_eq!(top.len(), 4);
        assert!(top.iter().all(|t| !t.contains('_')));

        let all = ranker(100).top_terms(&sentences);
        assert!(all.contains(&"budget".to_string()));
        assert!(all.iter().any(|t| t.contains("bill")));
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let sentences = vec![
            "Wildfires spread across the western hills".to_string(),
            "Firefighters contained the wildfires by evening".to_string(),
        ];
        let r = ranker(10);
        assert_eq!(r.top_terms(&sentences), r.top_terms(&sentences));
    }
}
