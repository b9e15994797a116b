use crate::config::types::{
    AnalysisConfig, Config, FetcherConfig, OutputConfig, RateLimitConfig, SearchConfig,
};
use crate::ConfigError;
use url::Url;

/// Largest cap a single run may request
pub const MAX_RESULTS_LIMIT: usize = 100;

/// Result pages past this index are never requested
pub const MAX_PAGES_LIMIT: u32 = 5;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search_config(&config.search)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_rate_limit_config(&config.rate_limit)?;
    validate_analysis_config(&config.analysis)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the search endpoint and pagination bounds
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    validate_max_results(config.max_results)?;

    if config.max_pages < 1 || config.max_pages > MAX_PAGES_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max-pages must be between 1 and {}, got {}",
            MAX_PAGES_LIMIT, config.max_pages
        )));
    }

    Ok(())
}

/// Validates a result cap, whether it came from the file or the CLI
pub fn validate_max_results(max_results: usize) -> Result<(), ConfigError> {
    if max_results < 1 || max_results > MAX_RESULTS_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max-results must be between 1 and {}, got {}",
            MAX_RESULTS_LIMIT, max_results
        )));
    }
    Ok(())
}

/// Validates HTTP client settings
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    // Timeouts must be finite and non-zero
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be between 1 and timeout-secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates crawl delays
fn validate_rate_limit_config(config: &RateLimitConfig) -> Result<(), ConfigError> {
    if config.item_delay_ms > config.page_delay_ms {
        return Err(ConfigError::Validation(format!(
            "item-delay-ms ({}) must not exceed page-delay-ms ({})",
            config.item_delay_ms, config.page_delay_ms
        )));
    }

    if config.page_delay_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "page-delay-ms must be <= 60000ms, got {}ms",
            config.page_delay_ms
        )));
    }

    Ok(())
}

/// Validates enrichment parameters
fn validate_analysis_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.top_keywords < 1 {
        return Err(ConfigError::Validation(format!(
            "top-keywords must be >= 1, got {}",
            config.top_keywords
        )));
    }

    if config.summary_max_chars < 20 {
        return Err(ConfigError::Validation(format!(
            "summary-max-chars must be >= 20, got {}",
            config.summary_max_chars
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.data_dir.trim().is_empty() {
        return Err(ConfigError::Validation(
            "data-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}
