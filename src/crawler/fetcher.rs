//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building an HTTP client with a fixed browser identity
//! - Single-attempt GET requests with optional query parameters
//! - Error classification into [`FetchError`]
//!
//! There is no retry. A failed fetch is reported once and the caller decides
//! whether an empty result is acceptable.

use crate::config::FetcherConfig;
use crate::{FetchError, FetchResult};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration (identity header and timeouts)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use news_pulse::config::FetcherConfig;
/// use news_pulse::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Single-attempt document fetcher
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher with a client built from `config`
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a document body
    ///
    /// # Error Classification
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | Unparseable URL | `InvalidUrl` |
    /// | Non-2xx status | `Status` |
    /// | Timeout | `Timeout` |
    /// | Connection refused / DNS / TLS | `Unreachable` |
    /// | Anything else | `Network` |
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to fetch
    /// * `params` - Query parameters appended to the URL, in order
    pub async fn fetch(&self, url: &str, params: &[(&str, String)]) -> FetchResult<String> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let mut request = self.client.get(parsed);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(|e| classify(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!("Rate limited by {}", url);
            }
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| classify(url, &e))
    }
}

/// Maps a transport error onto the fetch error taxonomy
fn classify(url: &str, e: &reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if e.is_connect() {
        FetchError::Unreachable {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}
