use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use newslens::config::Config;
use newslens::lexicon::Lexicons;
use newslens::output::{json as json_output, terminal};
use newslens::pipeline::analyze::ArticleAnalyzer;
use newslens::related::newsapi::NewsApiClient;
use newslens::related::traits::{ArticleSearch, NoopSearch};

/// Newslens: bias, subjectivity and political-leaning analysis for news articles.
///
/// Reads an article, reports its sentiment, bias indicators, subjectivity,
/// political leaning and keywords, and optionally finds related coverage.
#[derive(Parser)]
#[command(name = "newslens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an article read from a file or stdin
    Analyze {
        /// Article text file (reads stdin when omitted)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Also search for related articles (needs NEWS_API_KEY)
        #[arg(long)]
        related: bool,
    },

    /// Search for articles matching the given keywords
    Related {
        /// Keywords, most important first (only the first three are queried)
        #[arg(required = true)]
        keywords: Vec<String>,

        /// Max articles to return (default: NEWSLENS_MAX_RELATED or 10)
        #[arg(long)]
        max: Option<usize>,
    },

    /// Print the active lexicon configuration as JSON
    Lexicons,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newslens=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            json,
            related,
        } => {
            let config = Config::load()?;
            let text = read_article(file.as_ref())?;
            let analyzer = build_analyzer(&config)?;

            let analysis = analyzer.analyze_article(&text);

            let related_articles = if related {
                if !config.has_news_api() {
                    warn!("NEWS_API_KEY not set, related articles will be empty");
                }
                Some(
                    analyzer
                        .find_related_articles(&analysis.keywords, config.max_related)
                        .await,
                )
            } else {
                None
            };

            if json {
                json_output::write_report(
                    &mut std::io::stdout().lock(),
                    &analysis,
                    related_articles.as_deref(),
                )?;
            } else {
                terminal::display_analysis(&analysis);
                if let Some(articles) = &related_articles {
                    terminal::display_related(articles);
                }
            }
        }

        Commands::Related { keywords, max } => {
            let config = Config::load()?;
            config.require_news_api()?;
            let analyzer = build_analyzer(&config)?;

            let max_articles = max.unwrap_or(config.max_related);
            info!(keywords = ?keywords, max_articles, "Searching related articles");

            let articles = analyzer.find_related_articles(&keywords, max_articles).await;
            terminal::display_related(&articles);
        }

        Commands::Lexicons => {
            let config = Config::load()?;
            let lexicons = Lexicons::load(config.lexicon_path.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&lexicons)?);
        }
    }

    Ok(())
}

/// Read the article from `path`, or from stdin when no path is given.
fn read_article(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read article file {}", p.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read article from stdin")?;
            Ok(text)
        }
    }
}

/// Build the analyzer with the configured lexicons and search provider.
fn build_analyzer(config: &Config) -> Result<ArticleAnalyzer> {
    let lexicons = Arc::new(Lexicons::load(config.lexicon_path.as_deref())?);

    let search: Arc<dyn ArticleSearch> = if config.has_news_api() {
        Arc::new(NewsApiClient::new(
            &config.news_api_url,
            config.news_api_key.clone(),
        )?)
    } else {
        Arc::new(NoopSearch)
    };

    Ok(ArticleAnalyzer::with_builtin_models(lexicons)?.with_search(search))
}
