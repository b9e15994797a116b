//! News-Pulse main entry point
//!
//! This is the command-line interface for the News-Pulse news analysis pipeline.

use clap::Parser;
use news_pulse::config::{
    load_config_with_hash, validate, validate_max_results, Config, EmailCredentials,
};
use news_pulse::crawler::search_params;
use news_pulse::output::{print_keywords, print_sentiment_statistics};
use news_pulse::pipeline::{Pipeline, SilentProgress};
use news_pulse::storage::{ArtifactStore, JsonArtifactStore, StorageError};
use news_pulse::SearchQuery;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

/// News-Pulse: keyword news collection and analysis
///
/// News-Pulse searches a news portal for a term, collects the matching
/// articles, and writes summaries, a keyword ranking and sentiment
/// statistics as JSON artifacts plus a markdown report.
#[derive(Parser, Debug)]
#[command(name = "news-pulse")]
#[command(version = "1.0.0")]
#[command(about = "Keyword news collection and analysis", long_about = None)]
struct Cli {
    /// Search term
    #[arg(value_name = "TERM", required_unless_present_any = ["stats", "clear"])]
    term: Option<String>,

    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of articles to collect
    #[arg(short = 'n', long)]
    max_results: Option<usize>,

    /// Directory for artifacts and reports
    #[arg(long, value_name = "DIR")]
    data_dir: Option<String>,

    /// Number of keywords to rank
    #[arg(long)]
    top_keywords: Option<usize>,

    /// Skip writing the markdown report
    #[arg(long)]
    no_report: bool,

    /// Recipient for the emailed report; checks mail credentials before the run
    #[arg(long, value_name = "ADDRESS")]
    email_to: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the first search request without fetching
    #[arg(long, conflicts_with_all = ["stats", "clear"])]
    dry_run: bool,

    /// Show statistics from the stored artifacts and exit
    #[arg(long, conflicts_with_all = ["dry_run", "clear"])]
    stats: bool,

    /// Delete stored artifacts and reports and exit
    #[arg(long, conflicts_with_all = ["dry_run", "stats"])]
    clear: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Pick up GMAIL_* settings from a local .env, if any
    dotenvy::dotenv().ok();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&cli, &config)?;
    } else if cli.stats {
        handle_stats(&config)?;
    } else if cli.clear {
        handle_clear(&config)?;
    } else {
        handle_run(&cli, &config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("news_pulse=info,warn"),
            1 => EnvFilter::new("news_pulse=debug,info"),
            2 => EnvFilter::new("news_pulse=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn build_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(max_results) = cli.max_results {
        validate_max_results(max_results)?;
        config.search.max_results = max_results;
    }
    if let Some(data_dir) = &cli.data_dir {
        config.output.data_dir = data_dir.clone();
    }
    if let Some(top_keywords) = cli.top_keywords {
        config.analysis.top_keywords = top_keywords;
    }
    if cli.no_report {
        config.output.write_report = false;
    }

    validate(&config)?;
    Ok(config)
}

/// Handles the --dry-run mode: validates config and shows the first request
fn handle_dry_run(cli: &Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let term = cli.term.as_deref().unwrap_or_default();

    println!("=== News-Pulse Dry Run ===\n");

    println!("Search:");
    println!("  Endpoint: {}", config.search.base_url);
    println!("  Max results: {}", config.search.max_results);
    println!("  Max pages: {}", config.search.max_pages);

    println!("\nFetcher:");
    println!("  User agent: {}", config.fetcher.user_agent);
    println!(
        "  Timeouts: {}s request, {}s connect",
        config.fetcher.timeout_secs, config.fetcher.connect_timeout_secs
    );

    println!("\nRate Limits:");
    println!("  Between pages: {}ms", config.rate_limit.page_delay_ms);
    println!("  Between articles: {}ms", config.rate_limit.item_delay_ms);

    println!("\nAnalysis:");
    println!("  Top keywords: {}", config.analysis.top_keywords);
    println!("  Summary length: {} chars", config.analysis.summary_max_chars);

    println!("\nOutput:");
    println!("  Data directory: {}", config.output.data_dir);
    println!("  Markdown report: {}", if config.output.write_report { "yes" } else { "no" });

    let first_page = Url::parse_with_params(&config.search.base_url, search_params(term, 1))?;

    println!("\n✓ Configuration is valid");
    println!("✓ Would start with: GET {}", first_page);

    Ok(())
}

/// Handles the --stats mode: shows statistics from the stored artifacts
fn handle_stats(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonArtifactStore::new(&config.output.data_dir)?;

    println!("Data directory: {}\n", store.root().display());

    match store.load_sentiment() {
        Ok(sentiment) => {
            print_sentiment_statistics(&sentiment.statistics, &sentiment.analysis_date);
            println!();
        }
        Err(StorageError::NotFound(path)) => {
            println!("No sentiment analysis found ({})\n", path.display());
        }
        Err(e) => return Err(e.into()),
    }

    match store.load_keywords() {
        Ok(keywords) => print_keywords(&keywords, config.analysis.top_keywords),
        Err(StorageError::NotFound(path)) => println!("No keywords found ({})", path.display()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Handles the --clear mode: removes stored artifacts
fn handle_clear(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonArtifactStore::new(&config.output.data_dir)?;
    let deleted = store.clear()?;

    println!("✓ Deleted {} files from {}", deleted, store.root().display());

    Ok(())
}

/// Handles the main pipeline run
async fn handle_run(cli: &Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let term = cli.term.clone().unwrap_or_default();

    if let Some(recipient) = &cli.email_to {
        check_email_credentials(recipient);
    }

    let query = SearchQuery::new(term, config.search.max_results);
    tracing::info!(
        "Collecting up to {} articles for '{}'",
        query.max_results,
        query.term
    );

    let mut pipeline = Pipeline::new(config)?;
    if cli.quiet {
        pipeline = pipeline.with_progress(Box::new(SilentProgress));
    }

    match pipeline.run(&query).await {
        Ok(report) => {
            println!("✓ {} articles analyzed for '{}'", report.articles, report.term);
            println!(
                "  Sentiment: {} positive / {} negative / {} neutral (overall {})",
                report.statistics.positive_count,
                report.statistics.negative_count,
                report.statistics.neutral_count,
                report.statistics.overall_sentiment
            );
            println!("  Keywords: {}", report.keywords);
            for path in &report.artifacts {
                println!("  Artifact: {}", path.display());
            }
            if let Some(path) = &report.report_path {
                println!("  Report: {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            Err(e.into())
        }
    }
}

/// Warns when the mailer will not be able to send the report
///
/// Missing credentials never stop the run.
fn check_email_credentials(recipient: &str) {
    match EmailCredentials::from_env() {
        Ok(credentials) => tracing::info!(
            "Report for {} will be sent from {}",
            recipient,
            credentials.email
        ),
        Err(e) => tracing::warn!("{}; the report will not be emailed to {}", e, recipient),
    }
}
