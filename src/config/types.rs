use serde::Deserialize;

/// Browser identity sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for News-Pulse
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default, rename = "rate-limit")]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Search endpoint and pagination bounds
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint receiving the query parameters
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Number of articles collected when the CLI does not override it
    #[serde(rename = "max-results", default = "default_max_results")]
    pub max_results: usize,

    /// Highest result page that will be requested
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: u32,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// Delays that bound crawl cost
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Minimum time between two search-result page fetches (milliseconds)
    #[serde(rename = "page-delay-ms", default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Minimum time between two article body fetches (milliseconds)
    #[serde(rename = "item-delay-ms", default = "default_item_delay_ms")]
    pub item_delay_ms: u64,
}

/// Enrichment stage parameters
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Size of the keyword ranking
    #[serde(rename = "top-keywords", default = "default_top_keywords")]
    pub top_keywords: usize,

    /// Character budget of a generated summary
    #[serde(rename = "summary-max-chars", default = "default_summary_max_chars")]
    pub summary_max_chars: usize,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory holding the run artifacts
    #[serde(rename = "data-dir", default = "default_data_dir")]
    pub data_dir: String,

    /// Whether the markdown report is written at the end of a run
    #[serde(rename = "write-report", default = "default_write_report")]
    pub write_report: bool,
}

fn default_base_url() -> String {
    "https://search.daum.net/search".to_string()
}

fn default_max_results() -> usize {
    10
}

fn default_max_pages() -> u32 {
    5
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_page_delay_ms() -> u64 {
    1000
}

fn default_item_delay_ms() -> u64 {
    200
}

fn default_top_keywords() -> usize {
    30
}

fn default_summary_max_chars() -> usize {
    200
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_write_report() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_results: default_max_results(),
            max_pages: default_max_pages(),
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            page_delay_ms: default_page_delay_ms(),
            item_delay_ms: default_item_delay_ms(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_keywords: default_top_keywords(),
            summary_max_chars: default_summary_max_chars(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            write_report: default_write_report(),
        }
    }
}
