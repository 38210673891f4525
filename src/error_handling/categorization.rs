//! Error categorization.
//!
//! This module provides the mapping from `reqwest::Error` into the resolver's
//! error taxonomy.

use super::types::ResolveError;

/// Categorizes a `reqwest::Error` into a [`ResolveError`].
///
/// Errors carrying an HTTP status become [`ResolveError::HttpStatus`]; every
/// other failure (connect, timeout, request, body read, decode) is
/// transport-level and becomes [`ResolveError::Network`].
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
pub(crate) fn categorize_reqwest_error(error: reqwest::Error) -> ResolveError {
    match error.status() {
        Some(status) => ResolveError::HttpStatus {
            code: status.as_u16(),
        },
        None => ResolveError::Network(error),
    }
}

// Note: Constructing reqwest::Error instances requires real HTTP responses,
// so categorization is exercised through the httptest-based resolver tests
// and the wiremock integration tests in tests/resolve_fallback.rs.
