// Related-article retrieval — external search plus keyword relevance filtering.
//
// The ArticleSearch trait defines the search capability. NewsApiClient
// implements it against NewsAPI's /v2/everything endpoint; NoopSearch stands
// in when no API key is configured.

pub mod models;
pub mod traits;
pub mod newsapi;
pub mod filter;
