//! Integration tests for full pipeline runs
//!
//! A run is driven against a mock portal; the tests then inspect the
//! artifacts on disk, the reported progress and the final state.

use crate::common::{article_page, create_test_config, mount_article, mount_results_page, results_page};
use news_pulse::pipeline::{Pipeline, ProgressReporter};
use news_pulse::storage::{
    ArtifactStore, JsonArtifactStore, KeywordArtifact, SentimentArtifact, StorageError,
    StorageResult,
};
use news_pulse::{ArticleRecord, NewsError, PipelineState, SearchQuery};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use wiremock::MockServer;

/// Records every progress event and failure
#[derive(Default)]
struct RecordingProgress {
    weights: Mutex<Vec<u8>>,
    failures: Mutex<Vec<(PipelineState, String)>>,
}

/// Reporter handed to the pipeline; the test keeps the other handle
struct Recorder(Arc<RecordingProgress>);

impl ProgressReporter for Recorder {
    fn on_progress(&self, weight: u8, _message: &str) {
        self.0.weights.lock().unwrap().push(weight);
    }

    fn on_failure(&self, state: PipelineState, message: &str) {
        self.0.failures.lock().unwrap().push((state, message.to_string()));
    }
}

/// Delegates to a JSON store but refuses to write summarized articles
struct FailingSummaryStore {
    inner: JsonArtifactStore,
}

impl ArtifactStore for FailingSummaryStore {
    fn root(&self) -> &Path {
        self.inner.root()
    }

    fn save_articles(&self, articles: &[ArticleRecord]) -> StorageResult<PathBuf> {
        self.inner.save_articles(articles)
    }

    fn save_summarized(&self, _articles: &[ArticleRecord]) -> StorageResult<PathBuf> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only volume",
        )))
    }

    fn save_keywords(&self, keywords: &KeywordArtifact) -> StorageResult<PathBuf> {
        self.inner.save_keywords(keywords)
    }

    fn save_sentiment(&self, sentiment: &SentimentArtifact) -> StorageResult<PathBuf> {
        self.inner.save_sentiment(sentiment)
    }

    fn load_articles(&self) -> StorageResult<Vec<ArticleRecord>> {
        self.inner.load_articles()
    }

    fn load_summarized(&self) -> StorageResult<Vec<ArticleRecord>> {
        self.inner.load_summarized()
    }

    fn load_keywords(&self) -> StorageResult<KeywordArtifact> {
        self.inner.load_keywords()
    }

    fn load_sentiment(&self) -> StorageResult<SentimentArtifact> {
        self.inner.load_sentiment()
    }

    fn clear(&self) -> StorageResult<usize> {
        self.inner.clear()
    }
}

/// Serves two result pages with one article each, plus both article bodies
async fn mount_portal(server: &MockServer) {
    let base = server.uri();
    let first = format!("{}/article/1", base);
    let second = format!("{}/article/2", base);

    mount_results_page(
        server,
        1,
        results_page(&[("반도체 수출 석 달 연속 증가세", first.as_str())]),
        None,
    )
    .await;
    mount_results_page(
        server,
        2,
        results_page(&[("반도체 업황 개선에 투자 기대 확대", second.as_str())]),
        None,
    )
    .await;

    mount_article(
        server,
        "/article/1",
        article_page("반도체 수출이 크게 증가하며 경기 회복 기대가 커지고 있다."),
    )
    .await;
    mount_article(
        server,
        "/article/2",
        article_page("반도체 기업들의 실적 개선과 투자 확대가 이어지고 있다."),
    )
    .await;
}

#[tokio::test]
async fn test_full_run_writes_every_artifact() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_portal(&server).await;

    let config = create_test_config(&server, &dir);
    let progress = Arc::new(RecordingProgress::default());
    let mut pipeline = Pipeline::new(&config)
        .unwrap()
        .with_progress(Box::new(Recorder(progress.clone())));

    let report = pipeline.run(&SearchQuery::new("반도체", 2)).await.unwrap();

    assert_eq!(pipeline.state(), PipelineState::Done);
    assert_eq!(report.articles, 2);
    assert_eq!(report.artifacts.len(), 4);
    for name in [
        "articles.json",
        "summarized_articles.json",
        "keywords.json",
        "sentiment_analysis.json",
    ] {
        assert!(dir.path().join(name).exists(), "{} missing", name);
    }

    // Content was fetched and persisted before summarizing
    let store = JsonArtifactStore::new(dir.path()).unwrap();
    let articles = store.load_articles().unwrap();
    assert_eq!(articles.len(), 2);
    assert!(articles[0].content.starts_with("반도체 수출이"));

    let summarized = store.load_summarized().unwrap();
    assert!(summarized.iter().all(|a| a.ai_summary.is_some()));

    let keywords = store.load_keywords().unwrap();
    assert_eq!(keywords.keywords[0].word, "반도체");
    assert_eq!(keywords.total_keywords, keywords.keywords.len());

    let sentiment = store.load_sentiment().unwrap();
    assert_eq!(sentiment.statistics.total_articles, 2);
    assert!(sentiment.articles.iter().all(|a| a.sentiment.is_some()));

    let report_path = report.report_path.expect("markdown report");
    assert!(report_path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("news_report_반도체_") && n.ends_with(".md")));

    let weights = progress.weights.lock().unwrap().clone();
    assert_eq!(weights, vec![0, 10, 30, 50, 70, 75, 90, 100]);
    assert!(progress.failures.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_crawl_fails_without_artifacts() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_results_page(&server, 1, "<html><body>검색 결과 없음</body></html>".to_string(), Some(1)).await;

    let config = create_test_config(&server, &dir);
    let progress = Arc::new(RecordingProgress::default());
    let mut pipeline = Pipeline::new(&config)
        .unwrap()
        .with_progress(Box::new(Recorder(progress.clone())));

    let err = pipeline.run(&SearchQuery::new("없는검색어", 5)).await.unwrap_err();

    assert!(matches!(err, NewsError::EmptyCrawl { .. }));
    assert_eq!(pipeline.state(), PipelineState::Failed);

    let failures = progress.failures.lock().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, PipelineState::Crawling);
    assert!(failures[0].1.contains("없는검색어"));

    assert!(!dir.path().join("articles.json").exists());
}

#[tokio::test]
async fn test_persistence_failure_keeps_earlier_artifacts() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_portal(&server).await;

    let config = create_test_config(&server, &dir);
    let store = FailingSummaryStore {
        inner: JsonArtifactStore::new(dir.path()).unwrap(),
    };
    let progress = Arc::new(RecordingProgress::default());
    let mut pipeline = Pipeline::new(&config)
        .unwrap()
        .with_store(Box::new(store))
        .with_progress(Box::new(Recorder(progress.clone())));

    let err = pipeline.run(&SearchQuery::new("반도체", 2)).await.unwrap_err();

    assert!(matches!(err, NewsError::Storage(_)));
    assert_eq!(pipeline.state(), PipelineState::Failed);
    assert_eq!(progress.failures.lock().unwrap()[0].0, PipelineState::Summarizing);

    // Progress stopped at the failing stage
    assert_eq!(*progress.weights.lock().unwrap(), vec![0, 10, 30, 50]);

    assert!(dir.path().join("articles.json").exists());
    assert!(!dir.path().join("keywords.json").exists());
}

#[tokio::test]
async fn test_run_without_renderer() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_portal(&server).await;

    let mut config = create_test_config(&server, &dir);
    config.output.write_report = false;

    let mut pipeline = Pipeline::new(&config).unwrap();
    let report = pipeline.run(&SearchQuery::new("반도체", 1)).await.unwrap();

    assert_eq!(report.articles, 1);
    assert!(report.report_path.is_none());
    assert_eq!(pipeline.state(), PipelineState::Done);
}

#[tokio::test]
async fn test_clear_after_run() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_portal(&server).await;

    let config = create_test_config(&server, &dir);
    let mut pipeline = Pipeline::new(&config).unwrap();
    pipeline.run(&SearchQuery::new("반도체", 2)).await.unwrap();

    // Four JSON artifacts plus the markdown report
    assert_eq!(pipeline.store().clear().unwrap(), 5);
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}
