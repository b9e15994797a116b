//! Crawler module for search-result and article retrieval
//!
//! This module contains the acquisition half of the pipeline, including:
//! - HTTP fetching with a fixed browser identity
//! - Selector cascades over semi-structured markup
//! - Search-result parsing and article body extraction
//! - Request pacing and pagination
//!
//! # Example
//!
//! ```no_run
//! use news_pulse::config::Config;
//! use news_pulse::crawler::CrawlOrchestrator;
//! use news_pulse::SearchQuery;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut crawler = CrawlOrchestrator::new(&Config::default())?;
//! let stubs = crawler.crawl(&SearchQuery::new("반도체", 10)).await;
//! println!("{} articles", stubs.len());
//! # Ok(())
//! # }
//! ```

mod cascade;
mod content;
mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use cascade::{char_len, truncate_chars, visible_text, SelectorCascade};
pub use content::{ContentExtractor, MAX_CONTENT_CHARS};
pub use coordinator::{search_params, CrawlOrchestrator};
pub use fetcher::{build_http_client, Fetcher};
pub use parser::SearchResultParser;
pub use scheduler::Pacer;
