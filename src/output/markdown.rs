//! Markdown report generation
//!
//! This module generates a human-readable markdown report of a run,
//! including the sentiment summary, top keywords and per-article details.

use crate::crawler::{char_len, truncate_chars};
use crate::output::traits::{report_file_name, OutputResult, ReportData, ReportRenderer};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Number of keywords listed in the report
const REPORT_KEYWORDS: usize = 15;

/// Generated summaries longer than this are cut in the article list
const REPORT_SUMMARY_CHARS: usize = 150;

/// Writes `news_report_<term>_<timestamp>.md` into a directory
#[derive(Debug, Clone)]
pub struct MarkdownReport {
    dir: PathBuf,
}

impl MarkdownReport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportRenderer for MarkdownReport {
    fn render(&self, report: &ReportData<'_>) -> OutputResult<PathBuf> {
        let path = self
            .dir
            .join(report_file_name(report.term, &report.generated_at, "md"));

        let markdown = format_report(report);

        let mut file = File::create(&path)?;
        file.write_all(markdown.as_bytes())?;

        Ok(path)
    }
}

/// Formats a run as markdown
///
/// # Arguments
///
/// * `report` - The run data
///
/// # Returns
///
/// A formatted markdown string
pub fn format_report(report: &ReportData<'_>) -> String {
    let mut md = String::new();
    let stats = report.statistics;

    // Title
    md.push_str("# News Analysis Report\n\n");
    md.push_str(&format!("- **Keyword**: {}\n", report.term));
    md.push_str(&format!(
        "- **Analysis Date**: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M")
    ));
    md.push_str(&format!("- **Total Articles**: {}\n\n", report.articles.len()));

    // Sentiment summary
    md.push_str("## Analysis Summary\n\n");
    md.push_str("| Sentiment | Articles | Ratio |\n");
    md.push_str("|-----------|----------|-------|\n");
    md.push_str(&format!(
        "| Positive | {} | {:.1}% |\n",
        stats.positive_count, stats.positive_ratio
    ));
    md.push_str(&format!(
        "| Negative | {} | {:.1}% |\n",
        stats.negative_count, stats.negative_ratio
    ));
    md.push_str(&format!(
        "| Neutral | {} | {:.1}% |\n\n",
        stats.neutral_count, stats.neutral_ratio
    ));
    md.push_str(&format!(
        "Overall sentiment: **{}** (average score {:.3})\n\n",
        stats.overall_sentiment.as_str().to_uppercase(),
        stats.average_score
    ));

    // Keywords
    md.push_str("## Top Keywords\n\n");
    if report.keywords.is_empty() {
        md.push_str("No keywords extracted.\n\n");
    } else {
        for (i, keyword) in report.keywords.iter().take(REPORT_KEYWORDS).enumerate() {
            md.push_str(&format!("{}. {} ({} times)\n", i + 1, keyword.word, keyword.count));
        }
        md.push('\n');
    }

    // Articles
    md.push_str("## Article List\n\n");
    for (i, article) in report.articles.iter().enumerate() {
        md.push_str(&format!("### {}. {}\n\n", i + 1, article.stub.title));
        md.push_str(&format!("- **Source**: {}\n", article.stub.source));
        if !article.stub.link.is_empty() {
            md.push_str(&format!("- **Link**: <{}>\n", article.stub.link));
        }
        if let Some(sentiment) = &article.sentiment {
            md.push_str(&format!(
                "- **Sentiment**: {} (score {})\n",
                sentiment.sentiment.as_str().to_uppercase(),
                sentiment.score
            ));
        }

        let summary = article.best_summary();
        if !summary.is_empty() {
            let summary = if char_len(summary) > REPORT_SUMMARY_CHARS {
                format!("{}...", truncate_chars(summary, REPORT_SUMMARY_CHARS))
            } else {
                summary.to_string()
            };
            md.push_str(&format!("- **Summary**: {}\n", summary));
        }
        md.push('\n');
    }

    md
}
