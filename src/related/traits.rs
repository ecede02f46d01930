// Article search trait — the swap-ready abstraction over news search APIs.
//
// Implementations must be async because every real provider is an HTTP API.
// Errors are returned, not swallowed: the analyzer boundary decides how a
// failed search degrades.

use anyhow::Result;
use async_trait::async_trait;

use super::models::RelatedArticle;

/// How many keywords go into a search query.
pub const MAX_QUERY_KEYWORDS: usize = 3;

/// Result ordering requested from the provider: best match first.
pub const SORT_BY_RELEVANCY: &str = "relevancy";

/// A boolean-AND search over quoted keyword phrases.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Provider query string, e.g. `"tax cuts" AND "economy"`
    pub query: String,
    pub language: String,
    pub sort_by: &'static str,
    pub page_size: usize,
}

impl SearchQuery {
    /// Quote the first [`MAX_QUERY_KEYWORDS`] keywords and join them with AND.
    pub fn from_keywords(keywords: &[String], page_size: usize) -> Self {
        let query = keywords
            .iter()
            .take(MAX_QUERY_KEYWORDS)
            .map(|k| format!("\"{k}\""))
            .collect::<Vec<_>>()
            .join(" AND ");

        Self {
            query,
            language: "en".to_string(),
            sort_by: SORT_BY_RELEVANCY,
            page_size,
        }
    }
}

/// Trait for searching an external article corpus.
#[async_trait]
pub trait ArticleSearch: Send + Sync {
    /// Run a query, returning articles in the provider's ranking order.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RelatedArticle>>;
}

/// Search used when no provider is configured. Always fails, so callers
/// degrade to "no related articles" instead of silently returning fake data.
pub struct NoopSearch;

#[async_trait]
impl ArticleSearch for NoopSearch {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<RelatedArticle>> {
        anyhow::bail!("No article search configured: set NEWS_API_KEY to enable related articles")
    }
}
