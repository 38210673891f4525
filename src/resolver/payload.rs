//! Provider wire payloads.
//!
//! This module defines the JSON shapes returned by the two providers and the
//! normalization into [`IpInfo`]. Every field is optional on the wire: a
//! missing string becomes an empty string, a missing or null number becomes
//! `None`.

use serde::Deserialize;

use super::types::IpInfo;

fn default_true() -> bool {
    true
}

/// Full geolocation payload from the primary provider.
///
/// The `success` flag defaults to `true` when absent: a payload that carries
/// no flag at all is treated as a successful lookup.
#[derive(Debug, Deserialize)]
pub(crate) struct PrimaryPayload {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub ip: String,
    #[serde(rename = "type", default)]
    pub ip_type: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub continent_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub timezone: Option<TimezonePayload>,
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub isp: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Nested timezone object inside the primary payload.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TimezonePayload {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub abbr: String,
}

/// Minimal payload from the fallback provider.
#[derive(Debug, Deserialize)]
pub(crate) struct FallbackPayload {
    #[serde(default)]
    pub ip: String,
}

impl PrimaryPayload {
    /// Returns the provider's failure detail when `success` is false.
    ///
    /// A non-blank `message` field becomes the detail; a blank or absent
    /// message yields the generic `"Unknown error"`.
    pub(crate) fn failure_detail(&self) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

impl From<PrimaryPayload> for IpInfo {
    fn from(payload: PrimaryPayload) -> Self {
        let timezone = payload.timezone.unwrap_or_default();
        IpInfo {
            ip: payload.ip,
            ip_type: payload.ip_type,
            continent: payload.continent,
            continent_code: payload.continent_code,
            country: payload.country,
            region: payload.region,
            city: payload.city,
            timezone_id: timezone.id,
            timezone_abbr: timezone.abbr,
            org: payload.org,
            isp: payload.isp,
            latitude: finite_or_none(payload.latitude),
            longitude: finite_or_none(payload.longitude),
        }
    }
}

/// Drops non-finite coordinates.
///
/// Downstream formatting relies on "has value => finite", so a parsed value
/// that is NaN or infinite is treated as "no value".
fn finite_or_none(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
