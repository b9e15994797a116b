//! Storage traits and error types
//!
//! This module defines the trait interface for artifact backends and
//! associated error types.

use crate::models::ArticleRecord;
use crate::storage::{KeywordArtifact, SentimentArtifact};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Artifact not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for artifact backend implementations
///
/// Each pipeline stage owns exactly one artifact. Writing an artifact
/// replaces the previous version whole; a failed write leaves the previous
/// version intact.
pub trait ArtifactStore: Send + Sync {
    /// Directory the artifacts live in
    fn root(&self) -> &Path;

    // ===== Stage Outputs =====

    /// Saves crawled articles (`articles.json`)
    fn save_articles(&self, articles: &[ArticleRecord]) -> StorageResult<PathBuf>;

    /// Saves articles carrying generated summaries (`summarized_articles.json`)
    fn save_summarized(&self, articles: &[ArticleRecord]) -> StorageResult<PathBuf>;

    /// Saves the keyword ranking (`keywords.json`)
    fn save_keywords(&self, keywords: &KeywordArtifact) -> StorageResult<PathBuf>;

    /// Saves scored articles and their statistics (`sentiment_analysis.json`)
    fn save_sentiment(&self, sentiment: &SentimentArtifact) -> StorageResult<PathBuf>;

    // ===== Readback =====

    fn load_articles(&self) -> StorageResult<Vec<ArticleRecord>>;

    fn load_summarized(&self) -> StorageResult<Vec<ArticleRecord>>;

    fn load_keywords(&self) -> StorageResult<KeywordArtifact>;

    fn load_sentiment(&self) -> StorageResult<SentimentArtifact>;

    // ===== Maintenance =====

    /// Deletes every run artifact, including rendered reports
    ///
    /// # Returns
    ///
    /// The number of files deleted
    fn clear(&self) -> StorageResult<usize>;
}
