// Relevance filter for search results.
//
// A candidate survives when its lower-cased "title description" text
// contains at least MIN_KEYWORD_MATCHES of the article's keywords as plain
// substrings. The provider's ranking order is kept; results are only
// filtered and truncated.

use tracing::debug;

use super::models::RelatedArticle;

/// Keywords a candidate must mention to count as related.
pub const MIN_KEYWORD_MATCHES: usize = 2;

/// How many of `keywords` appear in `text`. `text` must already be lower-cased.
pub fn keyword_matches(text: &str, keywords: &[String]) -> usize {
    keywords
        .iter()
        .filter(|k| text.contains(k.to_lowercase().as_str()))
        .count()
}

/// Keep candidates mentioning at least two keywords, up to `max_count`.
pub fn filter_relevant(
    candidates: Vec<RelatedArticle>,
    keywords: &[String],
    max_count: usize,
) -> Vec<RelatedArticle> {
    let total = candidates.len();
    let kept: Vec<RelatedArticle> = candidates
        .into_iter()
        .filter(|article| keyword_matches(&article.match_text(), keywords) >= MIN_KEYWORD_MATCHES)
        .take(max_count)
        .collect();

    debug!(
        candidates = total,
        kept = kept.len(),
        max_count,
        "Filtered related articles"
    );

    kept
}
