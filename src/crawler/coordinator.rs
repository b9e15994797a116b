//! Crawl orchestration
//!
//! This module contains the pagination loop that turns a [`SearchQuery`] into
//! an ordered list of article stubs, and the per-article content pass:
//! - Building the query parameters for each result page
//! - Pacing page fetches and content fetches
//! - Deciding when pagination stops
//!
//! Fetches are awaited one at a time; nothing here runs concurrently.

use crate::config::Config;
use crate::crawler::{ContentExtractor, Fetcher, Pacer, SearchResultParser};
use crate::models::{ArticleRecord, ArticleStub, SearchQuery};
use crate::NewsError;
use url::Url;

/// Builds the query parameters for one search-results page
///
/// Page 1 uses the initial-search shape (`DA=NTB`); later pages use the
/// pagination shape (`DA=PGD` plus `p=<page>`).
pub fn search_params(term: &str, page: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("w", "news".to_string()),
        ("nil_search", "btn".to_string()),
    ];

    if page <= 1 {
        params.push(("DA", "NTB".to_string()));
    } else {
        params.push(("DA", "PGD".to_string()));
    }

    params.push(("enc", "utf8".to_string()));
    params.push(("cluster", "y".to_string()));
    params.push(("cluster_page", "1".to_string()));

    if page > 1 {
        params.push(("p", page.to_string()));
    }

    params.push(("q", term.to_string()));
    params
}

/// Drives the fetcher, the search-result parser and the content extractor
pub struct CrawlOrchestrator {
    fetcher: Fetcher,
    parser: SearchResultParser,
    content: ContentExtractor,
    base_url: Url,
    max_pages: u32,
    page_pacer: Pacer,
    item_pacer: Pacer,
}

impl CrawlOrchestrator {
    /// Creates an orchestrator with an HTTP client built from `config`
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOrchestrator)` - Ready to crawl
    /// * `Err(NewsError)` - The client could not be built or the base URL is invalid
    pub fn new(config: &Config) -> Result<Self, NewsError> {
        let fetcher = Fetcher::new(&config.fetcher)?;
        Self::with_fetcher(config, fetcher)
    }

    /// Creates an orchestrator around an existing fetcher
    pub fn with_fetcher(config: &Config, fetcher: Fetcher) -> Result<Self, NewsError> {
        Ok(Self {
            fetcher,
            parser: SearchResultParser::new()?,
            content: ContentExtractor::new()?,
            base_url: Url::parse(&config.search.base_url)?,
            max_pages: config.search.max_pages,
            page_pacer: Pacer::for_pages(&config.rate_limit),
            item_pacer: Pacer::for_items(&config.rate_limit),
        })
    }

    /// Collects up to `query.max_results` stubs across result pages
    ///
    /// Pagination stops when enough stubs are collected, when the page index
    /// passes the configured maximum, or when a page yields nothing. A page
    /// whose fetch fails counts as a page that yields nothing.
    pub async fn crawl(&mut self, query: &SearchQuery) -> Vec<ArticleStub> {
        let mut stubs: Vec<ArticleStub> = Vec::new();
        let mut page = 1;

        self.page_pacer.reset();

        while stubs.len() < query.max_results && page <= self.max_pages {
            let remaining = query.max_results - stubs.len();

            self.page_pacer.wait().await;
            tracing::info!("Fetching result page {} for '{}'", page, query.term);

            let page_stubs = self.fetch_page(&query.term, page, remaining).await;
            if page_stubs.is_empty() {
                tracing::info!("Page {} returned no results, stopping", page);
                break;
            }

            tracing::info!("Page {}: {} articles", page, page_stubs.len());
            stubs.extend(page_stubs);
            page += 1;
        }

        stubs.truncate(query.max_results);
        tracing::info!("Collected {} articles for '{}'", stubs.len(), query.term);
        stubs
    }

    async fn fetch_page(&self, term: &str, page: u32, limit: usize) -> Vec<ArticleStub> {
        let params = search_params(term, page);
        match self.fetcher.fetch(self.base_url.as_str(), &params).await {
            Ok(html) => self.parser.parse(&html, &self.base_url, limit),
            Err(e) => {
                tracing::warn!("Result page {} failed: {}", page, e);
                Vec::new()
            }
        }
    }

    /// Fills in `content` for each record, in order
    ///
    /// Records without a link keep empty content. Failures leave the record's
    /// content empty and the pass continues.
    pub async fn fetch_contents(&mut self, records: &mut [ArticleRecord]) {
        self.item_pacer.reset();
        let total = records.len();

        for (index, record) in records.iter_mut().enumerate() {
            if record.stub.link.is_empty() {
                tracing::debug!("Article {} has no link, skipping content", index + 1);
                continue;
            }

            self.item_pacer.wait().await;
            tracing::debug!("Fetching content {}/{}: {}", index + 1, total, record.stub.link);
            record.content = self.content.fetch_content(&self.fetcher, &record.stub.link).await;
        }

        let filled = records.iter().filter(|r| !r.content.is_empty()).count();
        tracing::info!("Recovered body text for {}/{} articles", filled, total);
    }
}
