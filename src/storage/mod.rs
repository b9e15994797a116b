//! Storage module for persisting stage artifacts
//!
//! This module handles all artifact I/O for the pipeline, including:
//! - One JSON document per stage, replaced whole on every write
//! - Readback for statistics and external consumers
//! - Removal of a run's artifacts
//!
//! Artifacts are UTF-8, pretty-printed, and keep Hangul unescaped.

mod json;
mod traits;

pub use json::JsonArtifactStore;
pub use traits::{ArtifactStore, StorageError, StorageResult};

use crate::models::{ArticleRecord, KeywordRecord, SentimentStatistics};
use serde::{Deserialize, Serialize};

/// File name prefix of rendered reports in the artifact directory
pub const REPORT_PREFIX: &str = "news_report_";

/// The per-stage artifacts of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Articles,
    SummarizedArticles,
    Keywords,
    Sentiment,
}

impl Artifact {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Articles => "articles.json",
            Self::SummarizedArticles => "summarized_articles.json",
            Self::Keywords => "keywords.json",
            Self::Sentiment => "sentiment_analysis.json",
        }
    }

    pub fn all() -> [Self; 4] {
        [
            Self::Articles,
            Self::SummarizedArticles,
            Self::Keywords,
            Self::Sentiment,
        ]
    }
}

/// Contents of `keywords.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordArtifact {
    pub keywords: Vec<KeywordRecord>,
    pub total_keywords: usize,
}

impl KeywordArtifact {
    pub fn new(keywords: Vec<KeywordRecord>) -> Self {
        let total_keywords = keywords.len();
        Self {
            keywords,
            total_keywords,
        }
    }
}

/// Contents of `sentiment_analysis.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentArtifact {
    pub articles: Vec<ArticleRecord>,
    pub statistics: SentimentStatistics,
    /// Local time the analysis ran, `YYYY-MM-DD HH:MM:SS.ffffff`
    pub analysis_date: String,
}

impl SentimentArtifact {
    /// Stamps the artifact with the current local time
    pub fn new(articles: Vec<ArticleRecord>, statistics: SentimentStatistics) -> Self {
        Self {
            articles,
            statistics,
            analysis_date: chrono::Local::now()
                .format("%Y-%m-%d %H:%M:%S%.6f")
                .to_string(),
        }
    }
}
