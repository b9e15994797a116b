//! Pipeline orchestration
//!
//! A run moves through a fixed sequence of stages:
//!
//! ```text
//! Idle → Crawling → ContentFetching → Summarizing → KeywordExtraction
//!      → SentimentAnalysis → Rendering → Done
//! ```
//!
//! Each stage runs to completion and persists its artifact before the next
//! one starts. An empty crawl or a failed artifact write moves the run to
//! `Failed`; whatever was already written stays on disk. Rendering problems
//! are logged and the run still finishes.

mod progress;

pub use progress::{ProgressReporter, SilentProgress, TracingProgress};

use crate::analysis::{summarize_articles, KeywordEngine, LeadSummarizer, SentimentScorer, Summarizer};
use crate::config::Config;
use crate::crawler::CrawlOrchestrator;
use crate::models::{ArticleRecord, SearchQuery, SentimentStatistics};
use crate::output::{MarkdownReport, ReportData, ReportRenderer};
use crate::state::PipelineState;
use crate::storage::{ArtifactStore, JsonArtifactStore, KeywordArtifact, SentimentArtifact, StorageResult};
use crate::NewsError;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub term: String,

    /// Number of articles that went through every stage
    pub articles: usize,

    /// Number of ranked keywords written
    pub keywords: usize,

    pub statistics: SentimentStatistics,

    /// Artifact paths in the order they were written (rewrites not repeated)
    pub artifacts: Vec<PathBuf>,

    /// Rendered report, when a renderer was configured and succeeded
    pub report_path: Option<PathBuf>,

    pub elapsed: Duration,
}

/// Sequences the crawl and enrichment stages for one query at a time
pub struct Pipeline {
    crawler: CrawlOrchestrator,
    store: Box<dyn ArtifactStore>,
    summarizer: Box<dyn Summarizer>,
    keywords: KeywordEngine,
    sentiment: SentimentScorer,
    renderer: Option<Box<dyn ReportRenderer>>,
    progress: Box<dyn ProgressReporter>,
    top_keywords: usize,
    state: PipelineState,
}

impl Pipeline {
    /// Creates a pipeline with the default collaborators for `config`
    ///
    /// - JSON artifacts in `output.data-dir`
    /// - Lead-sentence summaries of `analysis.summary-max-chars`
    /// - Built-in Korean stopwords and sentiment lexicon
    /// - A markdown report when `output.write-report` is set
    /// - Progress through `tracing`
    pub fn new(config: &Config) -> Result<Self, NewsError> {
        let store = JsonArtifactStore::new(&config.output.data_dir)?;

        let renderer: Option<Box<dyn ReportRenderer>> = if config.output.write_report {
            Some(Box::new(MarkdownReport::new(&config.output.data_dir)))
        } else {
            None
        };

        Ok(Self {
            crawler: CrawlOrchestrator::new(config)?,
            store: Box::new(store),
            summarizer: Box::new(LeadSummarizer::new(config.analysis.summary_max_chars)),
            keywords: KeywordEngine::default(),
            sentiment: SentimentScorer::default(),
            renderer,
            progress: Box::new(TracingProgress),
            top_keywords: config.analysis.top_keywords,
            state: PipelineState::Idle,
        })
    }

    pub fn with_crawler(mut self, crawler: CrawlOrchestrator) -> Self {
        self.crawler = crawler;
        self
    }

    pub fn with_store(mut self, store: Box<dyn ArtifactStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_summarizer(mut self, summarizer: Box<dyn Summarizer>) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub fn with_keyword_engine(mut self, keywords: KeywordEngine) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_sentiment_scorer(mut self, sentiment: SentimentScorer) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn with_renderer(mut self, renderer: Option<Box<dyn ReportRenderer>>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// The state the last (or current) run is in
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// The artifact store the pipeline writes to
    pub fn store(&self) -> &dyn ArtifactStore {
        self.store.as_ref()
    }

    /// Runs every stage for `query`
    ///
    /// # Returns
    ///
    /// * `Ok(RunReport)` - The run reached `Done`
    /// * `Err(NewsError::EmptyCrawl)` - No articles were found; nothing was written
    /// * `Err(NewsError::Storage)` - An artifact could not be written
    pub async fn run(&mut self, query: &SearchQuery) -> Result<RunReport, NewsError> {
        let start = Instant::now();
        let mut artifacts = Vec::new();

        self.state = PipelineState::Idle;
        self.progress.on_progress(0, "Starting");

        // ===== Crawling =====
        self.advance(
            PipelineState::Crawling,
            &format!("Searching news for '{}'", query.term),
        )?;
        let stubs = self.crawler.crawl(query).await;
        if stubs.is_empty() {
            return Err(self.fail(NewsError::EmptyCrawl {
                term: query.term.clone(),
            }));
        }

        let mut articles: Vec<ArticleRecord> = stubs.into_iter().map(ArticleRecord::from).collect();
        let path = self.persist(|store| store.save_articles(&articles))?;
        artifacts.push(path);

        // ===== ContentFetching =====
        self.advance(
            PipelineState::ContentFetching,
            &format!("Fetching content for {} articles", articles.len()),
        )?;
        self.crawler.fetch_contents(&mut articles).await;
        self.persist(|store| store.save_articles(&articles))?;

        // ===== Summarizing =====
        self.advance(PipelineState::Summarizing, "Summarizing articles")?;
        summarize_articles(self.summarizer.as_ref(), &mut articles);
        let path = self.persist(|store| store.save_summarized(&articles))?;
        artifacts.push(path);

        // ===== KeywordExtraction =====
        self.advance(PipelineState::KeywordExtraction, "Extracting keywords")?;
        let keywords = KeywordArtifact::new(self.keywords.rank_articles(&articles, self.top_keywords));
        let path = self.persist(|store| store.save_keywords(&keywords))?;
        artifacts.push(path);

        // ===== SentimentAnalysis =====
        self.advance(PipelineState::SentimentAnalysis, "Analyzing sentiment")?;
        self.sentiment.score_articles(&mut articles);
        let statistics = self.sentiment.aggregate_articles(&articles);
        let sentiment = SentimentArtifact::new(articles.clone(), statistics.clone());
        let path = self.persist(|store| store.save_sentiment(&sentiment))?;
        artifacts.push(path);

        // ===== Rendering =====
        self.advance(PipelineState::Rendering, "Rendering report")?;
        let report_path = self.render(&query.term, &articles, &keywords, &statistics);

        self.advance(PipelineState::Done, "Done")?;

        let elapsed = start.elapsed();
        tracing::info!(
            "Run for '{}' completed: {} articles, {} keywords, overall {} in {:?}",
            query.term,
            articles.len(),
            keywords.total_keywords,
            statistics.overall_sentiment,
            elapsed
        );

        Ok(RunReport {
            term: query.term.clone(),
            articles: articles.len(),
            keywords: keywords.total_keywords,
            statistics,
            artifacts,
            report_path,
            elapsed,
        })
    }

    /// Moves to the next stage and reports its weight
    fn advance(&mut self, to: PipelineState, message: &str) -> Result<(), NewsError> {
        if !self.state.can_transition_to(to) {
            return Err(NewsError::InvalidTransition {
                from: self.state,
                to,
            });
        }

        tracing::debug!("State {} -> {}", self.state, to);
        self.state = to;
        if let Some(weight) = to.weight() {
            self.progress.on_progress(weight, message);
        }
        Ok(())
    }

    /// Moves to `Failed` and reports the error
    fn fail(&mut self, error: NewsError) -> NewsError {
        let failed_in = self.state;
        self.state = PipelineState::Failed;
        self.progress.on_failure(failed_in, &error.to_string());
        error
    }

    fn persist<F>(&mut self, write: F) -> Result<PathBuf, NewsError>
    where
        F: FnOnce(&dyn ArtifactStore) -> StorageResult<PathBuf>,
    {
        match write(self.store.as_ref()) {
            Ok(path) => {
                tracing::info!("Saved {}", path.display());
                Ok(path)
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    fn render(
        &self,
        term: &str,
        articles: &[ArticleRecord],
        keywords: &KeywordArtifact,
        statistics: &SentimentStatistics,
    ) -> Option<PathBuf> {
        let renderer = self.renderer.as_ref()?;

        let report = ReportData {
            term,
            articles,
            keywords: &keywords.keywords,
            statistics,
            generated_at: chrono::Local::now(),
        };

        match renderer.render(&report) {
            Ok(path) => {
                tracing::info!("Report written to {}", path.display());
                Some(path)
            }
            Err(e) => {
                tracing::warn!("Report rendering failed: {}", e);
                None
            }
        }
    }
}
