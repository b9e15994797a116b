//! Article summarization
//!
//! [`Summarizer`] is the seam for a model-backed summarizer. The built-in
//! [`LeadSummarizer`] keeps the leading sentences of the cleaned text.

use crate::crawler::char_len;
use crate::models::ArticleRecord;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

// Bylines like "[홍길동 기자]" and asides in parentheses
static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*\]|\([^)]*\)").expect("bracket pattern is valid"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Produces a short summary of an article body
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str) -> String;
}

/// Keeps whole leading sentences up to a character budget
#[derive(Debug, Clone)]
pub struct LeadSummarizer {
    max_chars: usize,
}

impl Default for LeadSummarizer {
    fn default() -> Self {
        Self::new(200)
    }
}

impl LeadSummarizer {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    fn clean(text: &str) -> String {
        let text = TAG.replace_all(text, "");
        let text = BRACKETED.replace_all(&text, "");
        let text = WHITESPACE.replace_all(&text, " ");
        text.trim().to_string()
    }
}

impl Summarizer for LeadSummarizer {
    fn summarize(&self, text: &str) -> String {
        let cleaned = Self::clean(text);
        if char_len(&cleaned) <= self.max_chars {
            return cleaned;
        }

        let mut summary = String::new();
        let mut length = 0;

        for sentence in cleaned.split('.').filter(|s| !s.trim().is_empty()) {
            // Sentence plus its restored period
            let next = char_len(sentence) + 1;
            if length + next > self.max_chars {
                break;
            }
            summary.push_str(sentence);
            summary.push('.');
            length += next;
        }

        summary.trim().to_string()
    }
}

/// Summarizes each article's content, or its search snippet when the
/// content is empty, into `ai_summary`
pub fn summarize_articles(summarizer: &dyn Summarizer, articles: &mut [ArticleRecord]) {
    for article in articles.iter_mut() {
        let source = if article.content.is_empty() {
            &article.stub.summary
        } else {
            &article.content
        };
        article.ai_summary = Some(summarizer.summarize(source));
    }
}
