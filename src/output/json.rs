// JSON output — the machine-readable shape of `analyze --json`.
//
// Writers receive only the serialized report. Warnings and progress go
// through tracing (stderr), so stdout stays parseable.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::pipeline::analyze::ArticleAnalysis;
use crate::related::models::RelatedArticle;

/// Analysis fields at the top level, plus `related_articles` when requested.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport<'a> {
    #[serde(flatten)]
    pub analysis: &'a ArticleAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_articles: Option<&'a [RelatedArticle]>,
}

/// Write the pretty-printed report followed by a newline.
pub fn write_report<W: Write>(
    out: &mut W,
    analysis: &ArticleAnalysis,
    related_articles: Option<&[RelatedArticle]>,
) -> Result<()> {
    let report = AnalyzeReport {
        analysis,
        related_articles,
    };
    serde_json::to_writer_pretty(&mut *out, &report).context("Failed to serialize report")?;
    writeln!(out).context("Failed to write report")?;
    Ok(())
}
