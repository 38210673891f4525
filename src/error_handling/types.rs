//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured provider endpoint is not a valid URL.
    #[error("Invalid endpoint URL '{url}': {source}")]
    EndpointUrlError {
        /// The offending URL string.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },
}

/// Failure kinds surfaced by a lookup.
///
/// Exactly one of these propagates per failed [`resolve`] call: the one from
/// the primary attempt. The fallback attempt never surfaces its own errors --
/// it either produces a usable IP or nothing.
///
/// Callers are expected to treat any surfaced variant uniformly ("lookup
/// failed"); the taxonomy exists for logging and testing granularity.
///
/// [`resolve`]: crate::IpResolver::resolve
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Transport-level failure (connect, timeout, body read, malformed body).
    #[error("Network error: {0}")]
    Network(#[source] ReqwestError),

    /// The provider answered with a status outside 200-299.
    #[error("Unexpected response status: {code}")]
    HttpStatus {
        /// The HTTP status code of the response.
        code: u16,
    },

    /// The provider reported a logical failure inside a successful response.
    #[error("Provider error: {detail}")]
    Provider {
        /// The provider's human-readable message, or `"Unknown error"` when
        /// the message was blank or absent.
        detail: String,
    },
}
