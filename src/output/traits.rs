//! Report renderer traits and types
//!
//! This module defines the trait interface for report renderers and the
//! borrowed view of a finished run they consume.

use crate::models::{ArticleRecord, KeywordRecord, SentimentStatistics};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Everything a renderer needs from a completed run
#[derive(Debug, Clone)]
pub struct ReportData<'a> {
    /// The search term the run was started with
    pub term: &'a str,

    /// Articles in crawl order, with summaries and sentiment attached
    pub articles: &'a [ArticleRecord],

    /// Keyword ranking, highest count first
    pub keywords: &'a [KeywordRecord],

    pub statistics: &'a SentimentStatistics,

    /// Time the report is generated for; also used in the file name
    pub generated_at: DateTime<Local>,
}

/// Builds a report file name: `news_report_<term>_<YYYYMMDD_HHMMSS>.<ext>`
///
/// Path separators in the term are replaced so the name stays a single
/// path component.
pub fn report_file_name(term: &str, at: &DateTime<Local>, ext: &str) -> String {
    let term: String = term
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!(
        "{}{}_{}.{}",
        crate::storage::REPORT_PREFIX,
        term,
        at.format("%Y%m%d_%H%M%S"),
        ext
    )
}

/// Trait for report renderers
///
/// Renderers run in the last stage of the pipeline. A renderer failure is
/// reported but does not fail the run.
pub trait ReportRenderer: Send + Sync {
    /// Renders the report and returns where it was written
    fn render(&self, report: &ReportData<'_>) -> OutputResult<PathBuf>;
}
