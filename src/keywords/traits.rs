// Keyword extractor trait — swap-ready abstraction.
//
// The default implementation combines four signals from one parse of the
// article; a different ranking strategy can replace it without changing the
// analysis pipeline or the related-article search that consumes its output.

/// Trait for pulling a short list of representative keywords from an article.
pub trait KeywordExtractor: Send + Sync {
    /// At most a handful of keywords, best first. Deterministic for a given text.
    fn extract_keywords(&self, text: &str) -> Vec<String>;
}
