//! Statistics display from stored artifacts
//!
//! This module prints the sentiment aggregate and keyword ranking of the
//! last run to stdout.

use crate::models::{SentimentLabel, SentimentStatistics};
use crate::storage::KeywordArtifact;
use std::fmt::Write;

/// Formats sentiment statistics as a plain-text block
///
/// # Arguments
///
/// * `stats` - The statistics to display
/// * `analysis_date` - When the statistics were computed
pub fn format_sentiment_statistics(stats: &SentimentStatistics, analysis_date: &str) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "=== Sentiment Statistics ===\n");
    let _ = writeln!(out, "Overview:");
    let _ = writeln!(out, "  Articles analyzed: {}", stats.total_articles);
    let _ = writeln!(out, "  Analysis date: {}\n", analysis_date);

    let _ = writeln!(out, "Articles by Sentiment:");
    for (label, count, ratio) in [
        (SentimentLabel::Positive, stats.positive_count, stats.positive_ratio),
        (SentimentLabel::Negative, stats.negative_count, stats.negative_ratio),
        (SentimentLabel::Neutral, stats.neutral_count, stats.neutral_ratio),
    ] {
        let _ = writeln!(out, "  {}: {} ({:.1}%)", label, count, ratio);
    }

    let _ = writeln!(
        out,
        "\nOverall: {} (average score {:.3})",
        stats.overall_sentiment, stats.average_score
    );
    out
}

/// Prints sentiment statistics to stdout
pub fn print_sentiment_statistics(stats: &SentimentStatistics, analysis_date: &str) {
    print!("{}", format_sentiment_statistics(stats, analysis_date));
}

/// Formats the top `limit` keywords, one numbered row each
pub fn format_keywords(keywords: &KeywordArtifact, limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Keywords ({} extracted) ===\n", keywords.total_keywords);

    if keywords.keywords.is_empty() {
        let _ = writeln!(out, "  (none)");
        return out;
    }

    let width = keywords
        .keywords
        .iter()
        .take(limit)
        .map(|k| k.word.chars().count())
        .max()
        .unwrap_or(0);

    for (i, keyword) in keywords.keywords.iter().take(limit).enumerate() {
        let _ = writeln!(
            out,
            "  {:2}. {:<width$} {}",
            i + 1,
            keyword.word,
            keyword.count,
            width = width
        );
    }
    out
}

/// Prints the top `limit` keywords to stdout
pub fn print_keywords(keywords: &KeywordArtifact, limit: usize) {
    print!("{}", format_keywords(keywords, limit));
}
