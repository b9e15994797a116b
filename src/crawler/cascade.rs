//! Selector cascades
//!
//! A cascade is an ordered, immutable list of CSS selectors tried in priority
//! order until one produces an acceptable candidate. Page structure on news
//! portals shifts often; listing several known layouts and taking the first
//! that fits keeps extraction working across those shifts while staying
//! deterministic for identical markup.

use crate::ExtractionError;
use scraper::{ElementRef, Html, Selector};

/// Ordered list of parsed selectors
#[derive(Debug, Clone)]
pub struct SelectorCascade {
    selectors: Vec<(String, Selector)>,
}

impl SelectorCascade {
    /// Parses every selector up front
    ///
    /// # Returns
    ///
    /// * `Ok(SelectorCascade)` - All selectors parsed
    /// * `Err(ExtractionError::InvalidSelector)` - The first selector that failed
    pub fn parse(selectors: &[&str]) -> Result<Self, ExtractionError> {
        let selectors = selectors
            .iter()
            .map(|s| {
                Selector::parse(s)
                    .map(|parsed| (s.to_string(), parsed))
                    .map_err(|e| ExtractionError::InvalidSelector {
                        selector: s.to_string(),
                        message: format!("{:?}", e),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { selectors })
    }

    /// All nodes of the first selector that matches at least one node
    ///
    /// Later selectors are not tried once one matches.
    pub fn first_matching_set<'a>(&self, document: &'a Html) -> Option<(&str, Vec<ElementRef<'a>>)> {
        self.selectors.iter().find_map(|(source, selector)| {
            let nodes: Vec<_> = document.select(selector).collect();
            if nodes.is_empty() {
                None
            } else {
                Some((source.as_str(), nodes))
            }
        })
    }

    /// First node, in selector priority order, matched anywhere in the document
    pub fn first_in_document<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        self.selectors
            .iter()
            .find_map(|(_, selector)| document.select(selector).next())
    }

    /// Text of the first selector whose first match inside `scope` passes `accept`
    ///
    /// For each selector only its first descendant match is considered, so
    /// a rejected candidate moves the cascade on to the next selector.
    pub fn first_text<F>(&self, scope: ElementRef<'_>, accept: F) -> Option<(String, Option<String>)>
    where
        F: Fn(&str) -> bool,
    {
        self.selectors.iter().find_map(|(_, selector)| {
            let element = scope.select(selector).next()?;
            let text = visible_text(element);
            if accept(&text) {
                let href = element.value().attr("href").map(str::to_string);
                Some((text, href))
            } else {
                None
            }
        })
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

/// Visible text of an element: text fragments trimmed, empty ones dropped,
/// joined with single spaces
pub fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Length in characters (not bytes); all length guards count characters
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First `max` characters of `s`
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
