//! Configuration constants.
//!
//! This module defines the default provider endpoints and timeout values used
//! throughout the application.

/// Default primary provider endpoint.
///
/// The primary provider returns the full geolocation payload (continent,
/// country, region, city, timezone, org, ISP, coordinates) alongside the IP.
pub const PRIMARY_ENDPOINT: &str = "https://ipwho.is/";

/// Default fallback provider endpoint.
///
/// The fallback provider is only queried after the primary definitively fails
/// and returns nothing beyond `{"ip": "<address>"}`.
pub const FALLBACK_ENDPOINT: &str = "https://api.ipify.org/?format=json";

/// Connection establishment timeout in milliseconds.
///
/// Applied identically to both the primary and fallback endpoints.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Response read timeout in milliseconds.
///
/// Applied identically to both the primary and fallback endpoints.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;
