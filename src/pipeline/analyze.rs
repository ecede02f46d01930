// Article analyzer: the public entry point of the pipeline.
//
// One parse of the article feeds the bias analyzer and the keyword
// extractor; the political scorer works on the raw text. The three results
// are independent of each other and merged into one ArticleAnalysis.
//
// Related-article lookup is the only operation that touches the network.
// Any search failure is logged and degrades to an empty list.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::bias::analyzer::{BiasAnalysisResult, BiasAnalyzer};
use crate::keywords::composite::CompositeKeywordExtractor;
use crate::lexicon::Lexicons;
use crate::linguistics::rules::RuleBasedToolkit;
use crate::linguistics::sentiment::LexiconSentiment;
use crate::linguistics::traits::{LinguisticToolkit, SentimentAnalyzer};
use crate::related::filter::filter_relevant;
use crate::related::models::RelatedArticle;
use crate::related::traits::{ArticleSearch, NoopSearch, SearchQuery};
use crate::scoring::overall::BiasWeights;
use crate::scoring::political::{PoliticalAnalysisResult, PoliticalLeaningScorer};

/// Default number of related articles requested and returned.
pub const DEFAULT_MAX_ARTICLES: usize = 10;

/// Combined result of one `analyze_article` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    pub bias_analysis: BiasAnalysisResult,
    /// At most five keywords, best first
    pub keywords: Vec<String>,
    pub political_analysis: PoliticalAnalysisResult,
}

/// Holds the shared, read-only analysis components. Build once and reuse;
/// every method takes `&self`, so one analyzer can serve concurrent callers.
pub struct ArticleAnalyzer {
    toolkit: Arc<dyn LinguisticToolkit>,
    bias: BiasAnalyzer,
    keywords: CompositeKeywordExtractor,
    political: PoliticalLeaningScorer,
    search: Arc<dyn ArticleSearch>,
}

impl ArticleAnalyzer {
    /// Analyzer over the given toolkit, sentiment model and lexicons.
    ///
    /// Related-article search is disabled until [`with_search`](Self::with_search)
    /// installs a provider.
    pub fn new(
        toolkit: Arc<dyn LinguisticToolkit>,
        sentiment: Arc<dyn SentimentAnalyzer>,
        lexicons: Arc<Lexicons>,
    ) -> Result<Self> {
        Ok(Self {
            bias: BiasAnalyzer::new(toolkit.clone(), sentiment, lexicons.clone()),
            keywords: CompositeKeywordExtractor::new(toolkit.clone())?,
            political: PoliticalLeaningScorer::new(lexicons),
            search: Arc::new(NoopSearch),
            toolkit,
        })
    }

    /// Analyzer using the built-in rule-based toolkit and lexicon sentiment.
    pub fn with_builtin_models(lexicons: Arc<Lexicons>) -> Result<Self> {
        Self::new(
            Arc::new(RuleBasedToolkit::new()?),
            Arc::new(LexiconSentiment::default()),
            lexicons,
        )
    }

    pub fn with_search(mut self, search: Arc<dyn ArticleSearch>) -> Self {
        self.search = search;
        self
    }

    pub fn with_bias_weights(mut self, weights: BiasWeights) -> Self {
        self.bias = self.bias.with_weights(weights);
        self
    }

    /// Bias profile, keywords and political leaning of one article.
    pub fn analyze_article(&self, text: &str) -> ArticleAnalysis {
        let doc = self.toolkit.parse(text);

        let bias_analysis = self.bias.analyze_parsed(&doc);
        let keywords = self.keywords.extract_from(&doc);
        let political_analysis = self.political.score(text);

        info!(
            sentences = doc.sentences.len(),
            keywords = keywords.len(),
            overall_bias = bias_analysis.overall_bias_score,
            leaning = %political_analysis.leaning,
            "Analyzed article"
        );

        ArticleAnalysis {
            bias_analysis,
            keywords,
            political_analysis,
        }
    }

    /// Search for articles sharing this article's keywords.
    ///
    /// Returns an empty list without searching when `keywords` is empty, and
    /// an empty list when the search fails.
    pub async fn find_related_articles(
        &self,
        keywords: &[String],
        max_articles: usize,
    ) -> Vec<RelatedArticle> {
        if keywords.is_empty() || max_articles == 0 {
            return Vec::new();
        }

        let query = SearchQuery::from_keywords(keywords, max_articles);
        match self.search.search(&query).await {
            Ok(candidates) => {
                let related = filter_relevant(candidates, keywords, max_articles);
                info!(
                    query = %query.query,
                    related = related.len(),
                    "Found related articles"
                );
                related
            }
            Err(e) => {
                warn!(query = %query.query, error = %e, "Related article search failed");
                Vec::new()
            }
        }
    }
}
