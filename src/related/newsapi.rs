// NewsAPI implementation of ArticleSearch.
//
// Calls the `/v2/everything` endpoint with the API key in the X-Api-Key
// header. NewsAPI reports failures two ways: a non-2xx status, or a 200 with
// `{"status": "error", "code": ..., "message": ...}`. Both become errors.
//
// API docs: https://newsapi.org/docs/endpoints/everything

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::models::RelatedArticle;
use super::traits::{ArticleSearch, SearchQuery};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// NewsAPI `everything` search client.
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    /// Create a client for the given base URL and API key.
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("newslens/0.1 (article-analysis)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl ArticleSearch for NewsApiClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RelatedArticle>> {
        let url = format!("{}/v2/everything", self.base_url);
        let page_size = query.page_size.to_string();

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query.query.as_str()),
                ("language", query.language.as_str()),
                ("sortBy", query.sort_by),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .context("NewsAPI request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("NewsAPI returned {}: {}", status, body);
        }

        let body: NewsApiResponse = response
            .json()
            .await
            .context("Failed to parse NewsAPI response")?;

        let articles = body.into_articles()?;

        debug!(
            query = %query.query,
            returned = articles.len(),
            "NewsAPI search complete"
        );

        Ok(articles)
    }
}

// --- NewsAPI response types ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    total_results: Option<u64>,
    #[serde(default)]
    articles: Vec<RelatedArticle>,
}

impl NewsApiResponse {
    fn into_articles(self) -> Result<Vec<RelatedArticle>> {
        if self.status != "ok" {
            anyhow::bail!(
                "NewsAPI error ({}): {}",
                self.code.as_deref().unwrap_or("unknown"),
                self.message.as_deref().unwrap_or("no message")
            );
        }
        debug!(total_results = ?self.total_results, "NewsAPI reported totals");
        Ok(self.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok_response() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": {"id": null, "name": "Example Times"},
                    "author": "A. Writer",
                    "title": "Senate debates tax cuts",
                    "description": "The economy takes centre stage.",
                    "url": "https://example.com/a",
                    "urlToImage": null,
                    "publishedAt": "2024-03-01T12:00:00Z",
                    "content": "Body"
                },
                {"title": "Bare record"}
            ]
        }"#;
        let resp: NewsApiResponse = serde_json::from_str(json).unwrap();
        let articles = resp.into_articles().unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].source_name(), Some("Example Times"));
        assert!(articles[0].published_at.is_some());
        assert_eq!(articles[1].description, None);
    }

    #[test]
    fn test_error_status_becomes_error() {
        let json = r#"{
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid."
        }"#;
        let resp: NewsApiResponse = serde_json::from_str(json).unwrap();
        let err = resp.into_articles().unwrap_err().to_string();
        assert!(err.contains("apiKeyInvalid"), "unexpected error: {err}");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = NewsApiClient::new("https://newsapi.org/", "key".to_string()).unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
