// Lexicon configuration — the static term sets behind bias and political scoring.
//
// Lexicons are data, not code: the default set is embedded at compile time
// from data/lexicons.json and can be replaced wholesale with a JSON file at
// runtime (NEWSLENS_LEXICONS). Every entry is lower-cased, trimmed and
// deduplicated on construction; after that the lexicons are read-only and
// shared between analyzers behind an Arc.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

const DEFAULT_LEXICONS: &str = include_str!("../data/lexicons.json");

/// The complete lexicon document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicons {
    /// Bumped whenever the default term lists change
    pub version: u32,
    pub bias: BiasLexicons,
    pub political: PoliticalLexicons,
    /// Per-issue framing pairs, matched in file order
    pub framing: Vec<FramingPattern>,
}

/// Word sets used by the bias indicator detector and subjectivity scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasLexicons {
    pub opinion_words: Vec<String>,
    pub extreme_words: Vec<String>,
    pub hedge_words: Vec<String>,
    pub emotional_words: Vec<String>,
    pub loaded_words: Vec<String>,
}

/// Partisan vocabulary for each direction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PoliticalLexicons {
    pub left: PartisanTerms,
    pub right: PartisanTerms,
}

/// Terms score 1.0 per match, phrases 1.5.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartisanTerms {
    pub terms: Vec<String>,
    pub phrases: Vec<String>,
}

/// How one issue is phrased from each side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramingPattern {
    pub issue: String,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for Lexicons {
    fn default() -> Self {
        // The embedded document is validated by the test suite; failing to
        // parse it here would be a build defect, not a runtime condition.
        Self::from_json(DEFAULT_LEXICONS).unwrap_or_else(|e| {
            panic!("embedded lexicon document is invalid: {e:#}")
        })
    }
}

impl Lexicons {
    /// Parse a lexicon document and normalize every entry.
    pub fn from_json(json: &str) -> Result<Self> {
        let lexicons: Lexicons =
            serde_json::from_str(json).context("Failed to parse lexicon document")?;
        Ok(lexicons.normalized())
    }

    /// Load a lexicon document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let lexicons = Self::from_json(&json)
            .with_context(|| format!("Invalid lexicon file {}", path.display()))?;

        info!(
            path = %path.display(),
            version = lexicons.version,
            framing_issues = lexicons.framing.len(),
            "Loaded lexicon override"
        );

        Ok(lexicons)
    }

    /// Load from `path` when given, otherwise fall back to the embedded default.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_path(p),
            None => Ok(Self::default()),
        }
    }

    fn normalized(mut self) -> Self {
        let bias = &mut self.bias;
        for set in [
            &mut bias.opinion_words,
            &mut bias.extreme_words,
            &mut bias.hedge_words,
            &mut bias.emotional_words,
            &mut bias.loaded_words,
        ] {
            normalize_terms(set);
        }

        for side in [&mut self.political.left, &mut self.political.right] {
            normalize_terms(&mut side.terms);
            normalize_terms(&mut side.phrases);
        }

        for pattern in &mut self.framing {
            pattern.issue = pattern.issue.trim().to_lowercase();
            normalize_terms(&mut pattern.left);
            normalize_terms(&mut pattern.right);
        }

        self
    }
}

/// Lower-case, trim, drop empties and duplicates (first occurrence wins).
fn normalize_terms(terms: &mut Vec<String>) {
    let mut seen = HashSet::new();
    let normalized: Vec<String> = terms
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.clone()))
        .collect();
    *terms = normalized;
}

/// True when `haystack` (already lower-cased) contains any of `terms`.
///
/// Plain substring containment: a term inside a longer word still counts.
pub fn contains_any(haystack: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| haystack.contains(t.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_parses() {
        let lex = Lexicons::default();
        assert_eq!(lex.version, 1);
        assert_eq!(lex.bias.opinion_words.len(), 13);
        assert_eq!(lex.framing.len(), 3);
        assert_eq!(lex.framing[0].issue, "immigration");
    }

    #[test]
    fn test_normalization_lowercases_and_dedups() {
        let mut terms = vec![
            " Tax Cuts ".to_string(),
            "tax cuts".to_string(),
            "".to_string(),
            "Free Market".to_string(),
        ];
        normalize_terms(&mut terms);
        assert_eq!(terms, vec!["tax cuts", "free market"]);
    }

    #[test]
    fn test_contains_any_is_substring_match() {
        let terms = vec!["all".to_string()];
        // "all" inside "finally" is a match
        assert!(contains_any("we finally left", &terms));
        assert!(!contains_any("nothing here", &terms));
    }

    #[test]
    fn test_invalid_document_is_error() {
        assert!(Lexicons::from_json("{\"version\": 1}").is_err());
    }
}
