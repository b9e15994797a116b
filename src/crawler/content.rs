//! Article body extraction
//!
//! Content scraping never fails the crawl: a fetch error or a page none of
//! the body selectors recognize both produce an empty string.

use crate::crawler::cascade::{truncate_chars, visible_text, SelectorCascade};
use crate::crawler::Fetcher;
use crate::ExtractionError;
use scraper::Html;

const BODY_SELECTORS: &[&str] = &[
    "div.article_view",
    "div#harmonyContainer",
    "div.news_end",
    "div.article-body",
    "div.article_body",
    "div.read_body",
];

/// Maximum number of body characters kept per article
pub const MAX_CONTENT_CHARS: usize = 1000;

/// Recovers article body text
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    body: SelectorCascade,
}

impl ContentExtractor {
    pub fn new() -> Result<Self, ExtractionError> {
        Ok(Self {
            body: SelectorCascade::parse(BODY_SELECTORS)?,
        })
    }

    /// Visible text of the first body container, truncated to
    /// [`MAX_CONTENT_CHARS`] characters
    pub fn extract_body(&self, html: &str) -> Result<String, ExtractionError> {
        let document = Html::parse_document(html);
        let body = self
            .body
            .first_in_document(&document)
            .ok_or(ExtractionError::NoBody)?;

        Ok(truncate_chars(&visible_text(body), MAX_CONTENT_CHARS))
    }

    /// Fetches an article and extracts its body, degrading to `""`
    pub async fn fetch_content(&self, fetcher: &Fetcher, url: &str) -> String {
        let html = match fetcher.fetch(url, &[]).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Content fetch failed: {}", e);
                return String::new();
            }
        };

        match self.extract_body(&html) {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("No content for {}: {}", url, e);
                String::new()
            }
        }
    }
}
