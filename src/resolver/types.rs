//! Lookup result data structures.

/// Normalized public IP lookup result.
///
/// Produced fresh on every successful resolution; the record has no identity
/// beyond its values. Unknown textual fields are empty strings (never null)
/// so downstream formatting can treat blank and absent uniformly. Unknown
/// coordinates are `None` (never NaN or a numeric sentinel).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpInfo {
    /// Dotted/textual address; empty if unknown.
    pub ip: String,
    /// `"IPv4"` / `"IPv6"` / empty.
    pub ip_type: String,
    /// Continent name; empty if unknown.
    pub continent: String,
    /// Two-letter continent code; empty if unknown.
    pub continent_code: String,
    /// Country name; empty if unknown.
    pub country: String,
    /// Region/state name; empty if unknown.
    pub region: String,
    /// City name; empty if unknown.
    pub city: String,
    /// IANA timezone identifier; empty if unknown.
    pub timezone_id: String,
    /// Timezone abbreviation; empty if unknown.
    pub timezone_abbr: String,
    /// Organization name; empty if unknown.
    pub org: String,
    /// ISP name; empty if unknown.
    pub isp: String,
    /// Latitude in degrees; `None` when unknown, always finite when present.
    pub latitude: Option<f64>,
    /// Longitude in degrees; `None` when unknown, always finite when present.
    pub longitude: Option<f64>,
}
