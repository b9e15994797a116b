//! Search-results parser
//!
//! This module turns a raw search-results page into [`ArticleStub`]s:
//! - An item-container cascade locates result items
//! - Field cascades recover title, summary and source inside each item
//! - A generic link scan covers pages where no container selector matches

use crate::crawler::cascade::{char_len, visible_text, SelectorCascade};
use crate::models::{ArticleStub, DEFAULT_SOURCE};
use crate::ExtractionError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

const ITEM_SELECTORS: &[&str] = &[
    "div.c-item-content",
    "div.wrap_cont",
    "li.news",
    "div.item-title",
    "div.news-item",
    "article",
];

const TITLE_SELECTORS: &[&str] = &[
    "a.f_link_b",
    "a.tit-g",
    r#"a[class*="tit"]"#,
    r#"a[class*="link"]"#,
];

const SUMMARY_SELECTORS: &[&str] = &["p.c-item-text", ".summary", ".desc", "p"];

const SOURCE_SELECTORS: &[&str] = &["span.c-item-source", ".source", ".press"];

/// A title candidate from the selector cascade must be longer than this
const TITLE_CANDIDATE_MIN_CHARS: usize = 10;

/// Anchor-scan fallback titles must be at least this long
const TITLE_FALLBACK_MIN_CHARS: usize = 15;

/// Items whose final title is not longer than this are dropped
const TITLE_ACCEPT_MIN_CHARS: usize = 5;

/// Generic-scan link texts must be longer than this
const GENERIC_LINK_MIN_CHARS: usize = 10;

/// Parses search-results pages into article stubs
#[derive(Debug, Clone)]
pub struct SearchResultParser {
    items: SelectorCascade,
    title: SelectorCascade,
    summary: SelectorCascade,
    source: SelectorCascade,
    anchors: Selector,
}

impl SearchResultParser {
    /// Builds the parser with the fixed selector priority lists
    pub fn new() -> Result<Self, ExtractionError> {
        Ok(Self {
            items: SelectorCascade::parse(ITEM_SELECTORS)?,
            title: SelectorCascade::parse(TITLE_SELECTORS)?,
            summary: SelectorCascade::parse(SUMMARY_SELECTORS)?,
            source: SelectorCascade::parse(SOURCE_SELECTORS)?,
            anchors: parse_selector("a[href]")?,
        })
    }

    /// Extracts at most `limit` stubs from a search-results page
    ///
    /// # Arguments
    ///
    /// * `html` - The raw search-results document
    /// * `base_url` - The URL the page was fetched from, for resolving relative links
    /// * `limit` - Maximum number of stubs to return
    ///
    /// # Returns
    ///
    /// Stubs in document order. Items that fail extraction are skipped.
    pub fn parse(&self, html: &str, base_url: &Url, limit: usize) -> Vec<ArticleStub> {
        if limit == 0 {
            return Vec::new();
        }

        let document = Html::parse_document(html);

        let Some((selector, items)) = self.items.first_matching_set(&document) else {
            tracing::debug!("No item container matched, scanning all links");
            return self.parse_generic(&document, base_url, limit);
        };

        tracing::debug!("Item selector '{}' matched {} nodes", selector, items.len());

        let mut stubs = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            if stubs.len() >= limit {
                break;
            }

            match self.extract_item(item, base_url) {
                Ok(stub) => stubs.push(stub),
                Err(e) => tracing::debug!("Skipping item {}: {}", index, e),
            }
        }

        stubs
    }

    /// Recovers one stub from an item container
    pub fn extract_item(&self, item: ElementRef<'_>, base_url: &Url) -> Result<ArticleStub, ExtractionError> {
        let (title, href) = self
            .title
            .first_text(item, |text| char_len(text) > TITLE_CANDIDATE_MIN_CHARS)
            .or_else(|| self.longest_absolute_anchor(item))
            .ok_or(ExtractionError::MissingTitle)?;

        let length = char_len(&title);
        if length <= TITLE_ACCEPT_MIN_CHARS {
            return Err(ExtractionError::TitleTooShort { length });
        }

        let summary = self
            .summary
            .first_text(item, |text| !text.is_empty())
            .map(|(text, _)| text)
            .unwrap_or_default();

        let source = self
            .source
            .first_text(item, |text| !text.is_empty())
            .map(|(text, _)| text)
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

        Ok(ArticleStub {
            title,
            link: href.map(|h| resolve_link(&h, base_url)).unwrap_or_default(),
            summary,
            source,
        })
    }

    /// Longest anchor text of at least 15 chars whose href is absolute
    fn longest_absolute_anchor(&self, item: ElementRef<'_>) -> Option<(String, Option<String>)> {
        let mut best: Option<(String, String)> = None;

        for anchor in item.select(&self.anchors) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if !is_absolute_http(href) {
                continue;
            }

            let text = visible_text(anchor);
            let length = char_len(&text);
            if length < TITLE_FALLBACK_MIN_CHARS {
                continue;
            }

            // Ties keep the earlier anchor
            let longer = best
                .as_ref()
                .map_or(true, |(current, _)| length > char_len(current));
            if longer {
                best = Some((text, href.to_string()));
            }
        }

        best.map(|(text, href)| (text, Some(href)))
    }

    /// Fallback when no container selector matches: news-looking links
    fn parse_generic(&self, document: &Html, base_url: &Url, limit: usize) -> Vec<ArticleStub> {
        document
            .select(&self.anchors)
            .filter_map(|anchor| {
                let href = anchor.value().attr("href")?;
                if !href.to_lowercase().contains("news") {
                    return None;
                }

                let title = visible_text(anchor);
                if char_len(&title) <= GENERIC_LINK_MIN_CHARS {
                    return None;
                }

                Some(ArticleStub {
                    title,
                    link: resolve_link(href, base_url),
                    summary: String::new(),
                    source: DEFAULT_SOURCE.to_string(),
                })
            })
            .take(limit)
            .collect()
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

fn is_absolute_http(href: &str) -> bool {
    let href = href.trim();
    href.starts_with("http://") || href.starts_with("https://")
}

/// Resolves a link href against the page it was found on
///
/// Absolute links are returned unchanged; relative links are joined onto
/// `base_url`; anything that does not resolve to http(s) is kept verbatim.
fn resolve_link(href: &str, base_url: &Url) -> String {
    let href = href.trim();

    if is_absolute_http(href) {
        return href.to_string();
    }

    match base_url.join(href) {
        Ok(absolute) if absolute.scheme() == "http" || absolute.scheme() == "https" => {
            absolute.to_string()
        }
        _ => href.to_string(),
    }
}
