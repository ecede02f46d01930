// Unit tests for related-article retrieval.
//
// Search providers are stubbed in-process; the one NewsAPI test points the
// client at a closed local port, so nothing leaves the machine.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use newslens::lexicon::Lexicons;
use newslens::pipeline::analyze::ArticleAnalyzer;
use newslens::related::filter::{filter_relevant, MIN_KEYWORD_MATCHES};
use newslens::related::models::{ArticleSource, RelatedArticle};
use newslens::related::newsapi::NewsApiClient;
use newslens::related::traits::{ArticleSearch, SearchQuery, SORT_BY_RELEVANCY};

fn kw(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

fn article(title: &str, description: &str) -> RelatedArticle {
    RelatedArticle {
        source: Some(ArticleSource {
            id: None,
            name: Some("Example Wire".to_string()),
        }),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        url: Some(format!("https://example.com/{}", title.len())),
        ..Default::default()
    }
}

/// Returns a fixed list and records every query it receives.
struct StubSearch {
    articles: Vec<RelatedArticle>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl StubSearch {
    fn new(articles: Vec<RelatedArticle>) -> Self {
        Self {
            articles,
            queries: Mutex::new(Vec::new()),
        }
    }

    fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleSearch for StubSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RelatedArticle>> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.articles.clone())
    }
}

/// Always fails, like an upstream outage.
struct FailingSearch;

#[async_trait]
impl ArticleSearch for FailingSearch {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<RelatedArticle>> {
        anyhow::bail!("upstream returned 503")
    }
}

fn analyzer_with(search: Arc<dyn ArticleSearch>) -> ArticleAnalyzer {
    ArticleAnalyzer::with_builtin_models(Arc::new(Lexicons::default()))
        .unwrap()
        .with_search(search)
}

// ============================================================
// RelevanceFilter
// ============================================================

#[test]
fn filter_never_returns_fewer_than_two_matches() {
    let keywords = kw(&["tax cuts", "economy", "job creators"]);
    let candidates = vec![
        article("Tax cuts debated", "Lawmakers argue over the economy"),
        article("Economy grows", "Quarterly figures released"),
        article("Job creators speak", "Business owners discuss tax cuts"),
        article("Weather", "Sunny with a chance of rain"),
    ];
    let kept = filter_relevant(candidates, &keywords, 10);

    assert_eq!(kept.len(), 2);
    for a in &kept {
        let text = a.match_text();
        let matches = keywords.iter().filter(|k| text.contains(k.as_str())).count();
        assert!(matches >= MIN_KEYWORD_MATCHES);
    }
}

#[test]
fn filter_output_never_exceeds_max() {
    let keywords = kw(&["senate", "budget"]);
    let candidates: Vec<RelatedArticle> = (0..20)
        .map(|i| article(&format!("Senate budget story {i}"), ""))
        .collect();
    for max in [0, 1, 5, 19, 20, 50] {
        let kept = filter_relevant(candidates.clone(), &keywords, max);
        assert!(kept.len() <= max);
        assert_eq!(kept.len(), max.min(20));
    }
}

#[test]
fn filter_reads_description_when_title_missing() {
    let mut a = article("", "Senate passes budget");
    a.title = None;
    let kept = filter_relevant(vec![a], &kw(&["senate", "budget"]), 5);
    assert_eq!(kept.len(), 1);
}

#[test]
fn filter_keywords_are_case_insensitive() {
    let kept = filter_relevant(
        vec![article("senate and budget", "")],
        &kw(&["SENATE", "Budget"]),
        5,
    );
    assert_eq!(kept.len(), 1);
}

// ============================================================
// SearchQuery
// ============================================================

#[test]
fn query_quotes_and_joins_first_three_keywords() {
    let q = SearchQuery::from_keywords(&kw(&["a b", "c", "d", "e"]), 7);
    assert_eq!(q.query, r#""a b" AND "c" AND "d""#);
    assert_eq!(q.language, "en");
    assert_eq!(q.sort_by, SORT_BY_RELEVANCY);
    assert_eq!(q.sort_by, "relevancy");
    assert_eq!(q.page_size, 7);
}

// ============================================================
// ArticleAnalyzer::find_related_articles
// ============================================================

#[tokio::test]
async fn related_filters_search_results() {
    let search = Arc::new(StubSearch::new(vec![
        article("Tax cuts and the economy", "Analysis"),
        article("Unrelated", "Nothing to see"),
        article("The economy", "Job creators want tax cuts"),
    ]));
    let analyzer = analyzer_with(search.clone());

    let keywords = kw(&["tax cuts", "economy", "job creators", "congress"]);
    let related = analyzer.find_related_articles(&keywords, 10).await;

    assert_eq!(related.len(), 2);
    assert_eq!(related[0].title.as_deref(), Some("Tax cuts and the economy"));

    let queries = search.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(
        queries[0].query,
        r#""tax cuts" AND "economy" AND "job creators""#
    );
    assert_eq!(queries[0].page_size, 10);
}

#[tokio::test]
async fn related_empty_keywords_skip_search() {
    let search = Arc::new(StubSearch::new(vec![article("a", "b")]));
    let analyzer = analyzer_with(search.clone());

    let related = analyzer.find_related_articles(&[], 10).await;
    assert!(related.is_empty());
    assert!(search.queries().is_empty());
}

#[tokio::test]
async fn related_search_failure_degrades_to_empty() {
    let analyzer = analyzer_with(Arc::new(FailingSearch));
    let related = analyzer
        .find_related_articles(&kw(&["senate", "budget"]), 10)
        .await;
    assert!(related.is_empty());
}

#[tokio::test]
async fn related_without_provider_is_empty() {
    let analyzer = ArticleAnalyzer::with_builtin_models(Arc::new(Lexicons::default())).unwrap();
    let related = analyzer
        .find_related_articles(&kw(&["senate", "budget"]), 10)
        .await;
    assert!(related.is_empty());
}

#[tokio::test]
async fn related_connection_error_degrades_to_empty() {
    let client = NewsApiClient::new("http://127.0.0.1:1", "test-key".to_string()).unwrap();
    let analyzer = analyzer_with(Arc::new(client));
    let related = analyzer
        .find_related_articles(&kw(&["senate", "budget"]), 5)
        .await;
    assert!(related.is_empty());
}

#[tokio::test]
async fn related_respects_max_articles() {
    let articles: Vec<RelatedArticle> = (0..8)
        .map(|i| article(&format!("Senate budget {i}"), ""))
        .collect();
    let analyzer = analyzer_with(Arc::new(StubSearch::new(articles)));
    let related = analyzer
        .find_related_articles(&kw(&["senate", "budget"]), 3)
        .await;
    assert_eq!(related.len(), 3);
}
