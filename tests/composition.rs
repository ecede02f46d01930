// Composition tests — verifying that the analyzers chain together correctly.
//
// These tests exercise the full data flow:
//   Parse -> Bias / Keywords / Political -> ArticleAnalysis -> Related search
// with the built-in linguistic models and no network calls.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use newslens::bias::indicators::BiasCategory;
use newslens::lexicon::Lexicons;
use newslens::linguistics::traits::PolarityScores;
use newslens::output::json::write_report;
use newslens::output::truncate_chars;
use newslens::pipeline::analyze::{ArticleAnalysis, ArticleAnalyzer};
use newslens::related::models::RelatedArticle;
use newslens::related::traits::{ArticleSearch, SearchQuery};
use newslens::scoring::political::Leaning;

fn analyzer() -> ArticleAnalyzer {
    ArticleAnalyzer::with_builtin_models(Arc::new(Lexicons::default())).unwrap()
}

const LONG_ARTICLE: &str = "\
The Senate passed a sweeping tax bill on Tuesday after a long and bitter debate. \
Supporters said the tax cuts would help job creators and strengthen the free market. \
Critics called the plan a disaster and warned it would deepen income inequality.

Studies show that most voters are worried about the deficit. \
Some economists believe the bill could possibly raise wages, but nobody knows for sure. \
The White House said the president would sign it this week.";

// ============================================================
// Degenerate input
// ============================================================

fn assert_empty_analysis(analysis: &ArticleAnalysis) {
    assert!(analysis.keywords.is_empty());

    let bias = &analysis.bias_analysis;
    assert_eq!(bias.sentiment_scores, PolarityScores::default());
    assert!(bias.bias_indicators.is_empty());
    assert_eq!(bias.subjectivity_score, 0.0);
    assert!(bias.emotional_language.is_empty());
    assert_eq!(bias.overall_bias_score, 0.0);

    let political = &analysis.political_analysis;
    assert_eq!(political.leaning, Leaning::Neutral);
    assert_eq!(political.left_percentage, 0.0);
    assert_eq!(political.right_percentage, 0.0);
}

#[test]
fn empty_text_produces_zero_analysis() {
    assert_empty_analysis(&analyzer().analyze_article(""));
}

#[test]
fn whitespace_text_produces_zero_analysis() {
    assert_empty_analysis(&analyzer().analyze_article("  \n\n \t "));
}

// ============================================================
// Scenarios
// ============================================================

#[test]
fn right_leaning_scenario() {
    let analysis = analyzer()
        .analyze_article("The economy is doing great and we need tax cuts for job creators.");
    let political = &analysis.political_analysis;

    assert!(political.right_percentage > political.left_percentage);
    let label = political.leaning.label();
    assert!(
        label.starts_with("Strong Right") || label.starts_with("Moderate Right"),
        "got {label}"
    );
    assert!(political
        .evidence
        .right_indicators
        .contains(&"economy: job creators".to_string()));
    assert!(!analysis.keywords.is_empty());
    assert!(analysis.keywords.len() <= 5);
}

#[test]
fn studies_show_scenario() {
    let analysis = analyzer().analyze_article(
        "Studies show that this is controversial and everyone agrees it's amazing.",
    );
    let indicators = &analysis.bias_analysis.bias_indicators;

    for category in [
        BiasCategory::UnsubstantiatedClaims,
        BiasCategory::LoadedWords,
        BiasCategory::Generalizations,
        BiasCategory::EmotionalLanguage,
    ] {
        assert!(indicators.contains_key(&category), "missing {category}");
    }
    assert!(analysis.bias_analysis.overall_bias_score > 0.0);
}

#[test]
fn long_article_signals_are_bounded_and_consistent() {
    let analysis = analyzer().analyze_article(LONG_ARTICLE);

    let bias = &analysis.bias_analysis;
    assert!((0.0..=5.0).contains(&bias.overall_bias_score));
    assert!((0.0..=1.0).contains(&bias.subjectivity_score));
    assert!(!bias.bias_indicators.is_empty());

    let political = &analysis.political_analysis;
    assert!(political.left_score + political.right_score > 0.0);
    let sum = political.left_percentage + political.right_percentage;
    assert!((sum - 100.0).abs() < 0.02, "Expected ~100, got {sum}");

    assert!(!analysis.keywords.is_empty());
    assert!(analysis.keywords.len() <= 5);
}

#[test]
fn analysis_is_deterministic() {
    let a = analyzer();
    assert_eq!(a.analyze_article(LONG_ARTICLE), a.analyze_article(LONG_ARTICLE));
}

#[test]
fn analysis_serializes_with_expected_fields() {
    let analysis = analyzer().analyze_article(
        "Studies show that this is controversial and everyone agrees it's amazing.",
    );
    let json = serde_json::to_value(&analysis).unwrap();

    assert!(json["keywords"].is_array());
    assert!(json["bias_analysis"]["overall_bias_score"].is_number());
    assert!(json["bias_analysis"]["sentiment_scores"]["compound"].is_number());
    assert!(json["bias_analysis"]["bias_indicators"]["unsubstantiated_claims"].is_array());
    assert_eq!(json["political_analysis"]["leaning"], "Neutral/Centrist");
}

#[test]
fn json_report_is_the_only_output() {
    let a = analyzer();
    let analysis = a.analyze_article(LONG_ARTICLE);

    // Related requested without a provider: empty list, still a single JSON document
    let mut out = Vec::new();
    write_report(&mut out, &analysis, Some(&[])).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with('{'), "got {text:?}");
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["related_articles"], serde_json::json!([]));
    assert_eq!(json["keywords"], serde_json::json!(analysis.keywords));

    let mut out = Vec::new();
    write_report(&mut out, &analysis, None).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(json.get("related_articles").is_none());
    assert!(json["political_analysis"]["leaning"].is_string());
}

// ============================================================
// Keywords -> related search
// ============================================================

/// Echoes back one article built from the query's quoted phrases.
struct EchoSearch;

#[async_trait]
impl ArticleSearch for EchoSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RelatedArticle>> {
        let phrases = query.query.replace('"', "").replace(" AND ", " ");
        Ok(vec![
            RelatedArticle {
                title: Some(format!("Coverage: {phrases}")),
                ..Default::default()
            },
            RelatedArticle {
                title: Some("Unrelated story".to_string()),
                ..Default::default()
            },
        ])
    }
}

#[tokio::test]
async fn extracted_keywords_drive_related_search() {
    let analyzer = analyzer().with_search(Arc::new(EchoSearch));
    let analysis = analyzer.analyze_article(LONG_ARTICLE);
    assert!(analysis.keywords.len() >= 2);

    let related = analyzer.find_related_articles(&analysis.keywords, 10).await;
    assert_eq!(related.len(), 1);
    assert!(related[0]
        .title
        .as_deref()
        .is_some_and(|t| t.starts_with("Coverage:")));
}

#[test]
fn evidence_previews_truncate_safely() {
    let analysis = analyzer().analyze_article(LONG_ARTICLE);
    for sentences in analysis.bias_analysis.bias_indicators.values() {
        for s in sentences {
            let preview = truncate_chars(s, 40);
            assert!(preview.chars().count() <= 43);
        }
    }
}
