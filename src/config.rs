use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::pipeline::analyze::DEFAULT_MAX_ARTICLES;
use crate::related::newsapi::DEFAULT_BASE_URL;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// NewsAPI key. Empty disables related-article search.
    pub news_api_key: String,
    /// NewsAPI endpoint (defaults to https://newsapi.org)
    pub news_api_url: String,
    /// Optional lexicon override file (NEWSLENS_LEXICONS)
    pub lexicon_path: Option<PathBuf>,
    /// How many related articles to request and keep
    pub max_related: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is required: analysis works offline, and related-article
    /// search stays disabled until NEWS_API_KEY is set.
    pub fn load() -> Result<Self> {
        let max_related = match env::var("NEWSLENS_MAX_RELATED") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("NEWSLENS_MAX_RELATED must be a number, got {raw:?}"))?,
            Err(_) => DEFAULT_MAX_ARTICLES,
        };

        Ok(Self {
            news_api_key: env::var("NEWS_API_KEY").unwrap_or_default(),
            news_api_url: env::var("NEWS_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            lexicon_path: env::var("NEWSLENS_LEXICONS")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_related,
        })
    }

    /// Whether a NewsAPI key is configured.
    pub fn has_news_api(&self) -> bool {
        !self.news_api_key.is_empty()
    }

    /// Check that the NewsAPI key is configured.
    /// Call this before any operation that must reach the search API.
    pub fn require_news_api(&self) -> Result<()> {
        if !self.has_news_api() {
            anyhow::bail!(
                "NEWS_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
