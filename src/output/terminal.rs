// Colored terminal output for article analyses and related articles.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use crate::bias::analyzer::BiasAnalysisResult;
use crate::pipeline::analyze::ArticleAnalysis;
use crate::related::models::RelatedArticle;
use crate::scoring::political::{Leaning, PoliticalAnalysisResult};

/// Display a full article analysis.
pub fn display_analysis(analysis: &ArticleAnalysis) {
    println!("\n{}", "=== Article Analysis ===".bold());

    if analysis.keywords.is_empty() {
        println!("  Keywords: {}", "(none)".dimmed());
    } else {
        println!("  Keywords: {}", analysis.keywords.join(", ").cyan());
    }

    display_bias(&analysis.bias_analysis);
    display_political(&analysis.political_analysis);
}

fn display_bias(bias: &BiasAnalysisResult) {
    println!("\n{}", "Bias".bold());
    println!(
        "  Overall bias: {}/5.0",
        colorize_bias(bias.overall_bias_score)
    );
    println!("  Subjectivity: {:.2}", bias.subjectivity_score);

    let s = &bias.sentiment_scores;
    println!(
        "  Sentiment: compound {:+.3}  pos {:.3}  neg {:.3}  neu {:.3}",
        s.compound, s.pos, s.neg, s.neu
    );

    if bias.bias_indicators.is_empty() {
        println!("  Indicators: {}", "none detected".green());
    } else {
        println!("  Indicators:");
        for (category, sentences) in &bias.bias_indicators {
            println!(
                "    {} ({} sentence{})",
                category.name().yellow(),
                sentences.len(),
                if sentences.len() == 1 { "" } else { "s" }
            );
            for sentence in sentences {
                println!("      {}", super::truncate_chars(sentence, 100).dimmed());
            }
        }
    }

    if !bias.emotional_language.is_empty() {
        println!("  Emotional sentences:");
        for sentence in &bias.emotional_language {
            println!(
                "    [{:+.2}] {}",
                sentence.intensity,
                super::truncate_chars(&sentence.text, 100).dimmed()
            );
        }
    }
}

fn display_political(political: &PoliticalAnalysisResult) {
    println!("\n{}", "Political leaning".bold());
    println!("  Leaning: {}", colorize_leaning(political.leaning));
    println!(
        "  Left {:.2}% ({:.1})  |  Right {:.2}% ({:.1})",
        political.left_percentage,
        political.left_score,
        political.right_percentage,
        political.right_score
    );

    let evidence = &political.evidence;
    if !evidence.left_indicators.is_empty() {
        println!("  Left evidence: {}", evidence.left_indicators.join(", ").blue());
    }
    if !evidence.right_indicators.is_empty() {
        println!("  Right evidence: {}", evidence.right_indicators.join(", ").red());
    }
}

/// Display a list of related articles.
pub fn display_related(articles: &[RelatedArticle]) {
    if articles.is_empty() {
        println!("\nNo related articles found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Related Articles ({}) ===", articles.len()).bold()
    );

    for (i, article) in articles.iter().enumerate() {
        let title = article.title.as_deref().unwrap_or("(untitled)");
        let source = article.source_name().unwrap_or("unknown source");
        let date = article
            .published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();

        println!("  {:>2}. {}", i + 1, title.bold());
        println!("      {} {}", source.cyan(), date.dimmed());
        if let Some(url) = &article.url {
            println!("      {}", url.dimmed());
        }
    }
    println!();
}

/// Colorize an overall bias score on the 0-5 scale.
fn colorize_bias(score: f64) -> colored::ColoredString {
    let text = format!("{score:.2}");
    if score >= 3.5 {
        text.red().bold()
    } else if score >= 2.0 {
        text.yellow()
    } else {
        text.green()
    }
}

/// Colorize a leaning label.
fn colorize_leaning(leaning: Leaning) -> colored::ColoredString {
    let label = leaning.label();
    match leaning {
        Leaning::StrongLeft => label.blue().bold(),
        Leaning::ModerateLeft => label.blue(),
        Leaning::Neutral => label.normal(),
        Leaning::ModerateRight => label.red(),
        Leaning::StrongRight => label.red().bold(),
    }
}
