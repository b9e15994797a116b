//! Request pacing for the crawl
//!
//! This module handles:
//! - The fixed pause between search-result page fetches
//! - The fixed pause between per-article content fetches
//!
//! Requests are strictly sequential. A [`Pacer`] sleeps the full delay before
//! every request of its kind except the first, however long the previous
//! response took.

use crate::config::RateLimitConfig;
use std::time::Duration;

/// Puts a fixed pause between consecutive requests of one kind
#[derive(Debug, Clone)]
pub struct Pacer {
    /// Pause before each request after the first
    delay: Duration,

    /// Whether a request has gone out since the last reset
    started: bool,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            started: false,
        }
    }

    /// Pacer for search-result pages
    pub fn for_pages(config: &RateLimitConfig) -> Self {
        Self::new(Duration::from_millis(config.page_delay_ms))
    }

    /// Pacer for article content fetches
    pub fn for_items(config: &RateLimitConfig) -> Self {
        Self::new(Duration::from_millis(config.item_delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The pause owed before the next request
    ///
    /// # Returns
    ///
    /// * `Some(Duration)` - The full delay; a request already went out
    /// * `None` - First request since the last reset, or no delay configured
    pub fn pause_before_next(&self) -> Option<Duration> {
        if self.started && !self.delay.is_zero() {
            Some(self.delay)
        } else {
            None
        }
    }

    /// Sleeps the owed pause, then marks a request as sent
    pub async fn wait(&mut self) {
        if let Some(pause) = self.pause_before_next() {
            tracing::trace!("Pacing: sleeping {:?}", pause);
            tokio::time::sleep(pause).await;
        }
        self.started = true;
    }

    /// Forgets previous requests so the next `wait` returns immediately
    pub fn reset(&mut self) {
        self.started = false;
    }
}
