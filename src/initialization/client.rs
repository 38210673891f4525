//! HTTP client initialization.
//!
//! This module provides the function to initialize the HTTP client shared by
//! the primary and fallback lookups.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for both provider endpoints.
///
/// Creates a `reqwest::Client` configured with:
/// - Connection establishment timeout from the config (default 10s)
/// - Total request timeout from the config (default 10s), bounding the
///   response read
///
/// Both timeouts apply identically to the primary and fallback requests. The
/// client is cheap to clone and releases connections on every exit path,
/// success or failure.
///
/// # Arguments
///
/// * `config` - Configuration containing the timeout settings
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
        .timeout(Duration::from_millis(config.read_timeout_ms))
        .build()?;
    Ok(client)
}
