//! News-Pulse: keyword news acquisition and enrichment
//!
//! This crate searches a news portal for a term, extracts article metadata and
//! body text from semi-structured markup, and enriches the articles with
//! summaries, keyword frequency rankings and lexicon-based sentiment scores.
//! Every stage writes its own JSON artifact for downstream renderers.

pub mod analysis;
pub mod config;
pub mod crawler;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod state;
pub mod storage;

use thiserror::Error;

/// Main error type for News-Pulse operations
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Persistence error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("No articles found for '{term}'")]
    EmptyCrawl { term: String },

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::PipelineState,
        to: state::PipelineState,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Missing email credentials: set {} in the environment or a .env file", .missing.join(" and "))]
    MissingCredentials { missing: Vec<&'static str> },
}

/// Network and HTTP status failures from a single fetch attempt
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}")]
    Unreachable { url: String },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

/// Failures to recover a field or body from a parsed document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("No title candidate found in item")]
    MissingTitle,

    #[error("Title too short ({length} chars)")]
    TitleTooShort { length: usize },

    #[error("No body container matched")]
    NoBody,
}

/// Result type alias for News-Pulse operations
pub type Result<T> = std::result::Result<T, NewsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use models::{ArticleRecord, ArticleStub, KeywordRecord, SearchQuery};
pub use pipeline::{Pipeline, RunReport};
pub use state::PipelineState;
