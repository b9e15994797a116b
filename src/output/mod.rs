//! Output module for reports and statistics
//!
//! This module handles:
//! - Rendering a finished run as a markdown report
//! - Naming report files
//! - Printing stored statistics for the `--stats` mode

mod markdown;
pub mod stats;
mod traits;

pub use markdown::{format_report, MarkdownReport};
pub use stats::{
    format_keywords, format_sentiment_statistics, print_keywords, print_sentiment_statistics,
};
pub use traits::{report_file_name, OutputError, OutputResult, ReportData, ReportRenderer};
