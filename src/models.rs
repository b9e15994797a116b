//! Data models shared by the crawl, the enrichment stages and the artifacts.
//!
//! - [`SearchQuery`]: the term and result cap for one run
//! - [`ArticleStub`]: what a search-results page tells us about an article
//! - [`ArticleRecord`]: a stub plus everything the enrichment stages add
//! - [`KeywordRecord`]: one ranked keyword
//! - [`SentimentResult`] / [`SentimentStatistics`]: per-article and aggregate polarity
//!
//! Field names serialize in snake_case, which is the artifact format the
//! report and dashboard consumers read.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source label used when a search result carries no press name.
pub const DEFAULT_SOURCE: &str = "다음뉴스";

/// The term and result cap for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search term sent as the `q` parameter
    pub term: String,

    /// Maximum number of articles the run may return (always > 0)
    pub max_results: usize,
}

impl SearchQuery {
    /// Creates a query; a zero cap is raised to one
    pub fn new(term: impl Into<String>, max_results: usize) -> Self {
        Self {
            term: term.into(),
            max_results: max_results.max(1),
        }
    }
}

/// Minimal article record recovered from a search-results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleStub {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub source: String,
}

/// A stub enriched by the pipeline stages
///
/// Fields are only ever added: content after the crawl, `ai_summary` after
/// summarization, `sentiment` after scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(flatten)]
    pub stub: ArticleStub,

    /// Body text, at most 1000 characters; empty when extraction failed
    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
}

impl From<ArticleStub> for ArticleRecord {
    fn from(stub: ArticleStub) -> Self {
        Self {
            stub,
            content: String::new(),
            ai_summary: None,
            sentiment: None,
        }
    }
}

impl ArticleRecord {
    /// The summary keyword extraction should read: the generated one when
    /// present and non-empty, otherwise the search snippet.
    pub fn best_summary(&self) -> &str {
        match self.ai_summary.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => &self.stub.summary,
        }
    }

    /// Text fed to keyword extraction: title, best summary and content
    pub fn keyword_text(&self) -> String {
        format!("{} {} {}", self.stub.title, self.best_summary(), self.content)
    }

    /// Text fed to sentiment scoring: title, search snippet and content
    pub fn sentiment_text(&self) -> String {
        format!("{} {} {}", self.stub.title, self.stub.summary, self.content)
    }
}

/// One ranked keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub word: String,
    pub count: usize,
}

/// Polarity label for an article or a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Score above which a text is positive
    pub const POSITIVE_THRESHOLD: f64 = 0.1;

    /// Score below which a text is negative
    pub const NEGATIVE_THRESHOLD: f64 = -0.1;

    /// Classifies a score with the fixed ±0.1 thresholds
    pub fn from_score(score: f64) -> Self {
        if score > Self::POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < Self::NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexicon score of a single text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    /// In [-1, 1], rounded to three decimals
    pub score: f64,
    pub positive_count: usize,
    pub negative_count: usize,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            sentiment: SentimentLabel::Neutral,
            score: 0.0,
            positive_count: 0,
            negative_count: 0,
        }
    }
}

/// Aggregate over the per-article sentiment results of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentStatistics {
    pub total_articles: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    /// Percentages rounded to one decimal
    pub positive_ratio: f64,
    pub negative_ratio: f64,
    pub neutral_ratio: f64,
    /// Mean article score rounded to three decimals
    pub average_score: f64,
    pub overall_sentiment: SentimentLabel,
}
