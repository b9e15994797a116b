//! Configuration module for News-Pulse
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, plus the environment-provided email credentials.
//!
//! # Example
//!
//! ```no_run
//! use news_pulse::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("news-pulse.toml")).unwrap();
//! println!("Pages are fetched {}ms apart", config.rate_limit.page_delay_ms);
//! ```

mod credentials;
mod parser;
mod types;
mod validation;

pub use credentials::{EmailCredentials, EMAIL_VAR, PASSWORD_VAR};
pub use types::{
    AnalysisConfig, Config, FetcherConfig, OutputConfig, RateLimitConfig, SearchConfig,
    DEFAULT_USER_AGENT,
};
pub use validation::{validate, validate_max_results, MAX_PAGES_LIMIT, MAX_RESULTS_LIMIT};

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
