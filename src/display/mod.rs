//! Display formatting for lookup results.
//!
//! Pure functions turning an [`IpInfo`] into the strings a UI shows. Blank
//! strings and absent coordinates render as an em-dash placeholder; the
//! resolver's contract of "blank/absent means unknown" is what makes that
//! policy work.

use crate::resolver::IpInfo;

/// Placeholder rendered for any blank string or absent coordinate.
pub const PLACEHOLDER: &str = "—";

/// Half-width of the bounding box around the marker in the map embed, in degrees.
const MAP_BBOX_DELTA: f64 = 0.05;

/// Renders a single textual field, falling back to the placeholder when blank.
pub fn value_line(value: &str) -> String {
    if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

/// Renders the location line: non-blank country/region/city joined with `" / "`.
pub fn location_line(info: &IpInfo) -> String {
    let parts: Vec<&str> = [&info.country, &info.region, &info.city]
        .into_iter()
        .map(String::as_str)
        .filter(|part| !part.trim().is_empty())
        .collect();
    if parts.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        parts.join(" / ")
    }
}

/// Renders the continent line as `"Continent (CODE)"`, either side alone, or
/// the placeholder.
pub fn continent_line(info: &IpInfo) -> String {
    paired_line(&info.continent, &info.continent_code)
}

/// Renders the timezone line as `"Id (ABBR)"`, either side alone, or the
/// placeholder.
pub fn timezone_line(info: &IpInfo) -> String {
    paired_line(&info.timezone_id, &info.timezone_abbr)
}

/// Renders the coordinates line with four decimal places, e.g.
/// `"51.5074, -0.1278"`.
///
/// Both coordinates must be present and finite; otherwise the placeholder is
/// rendered.
pub fn coordinates_line(info: &IpInfo) -> String {
    match (info.latitude, info.longitude) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
            format!("{lat:.4}, {lon:.4}")
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Builds an OpenStreetMap embed URL centered on the coordinates.
///
/// Uses a bounding box of [`MAP_BBOX_DELTA`] degrees around the marker and
/// requires no API key. Returns `None` without finite coordinates.
pub fn map_embed_url(info: &IpInfo) -> Option<String> {
    let (lat, lon) = match (info.latitude, info.longitude) {
        (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => (lat, lon),
        _ => return None,
    };
    let west = lon - MAP_BBOX_DELTA;
    let south = lat - MAP_BBOX_DELTA;
    let east = lon + MAP_BBOX_DELTA;
    let north = lat + MAP_BBOX_DELTA;
    Some(format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={west},{south},{east},{north}&layer=mapnik&marker={lat},{lon}"
    ))
}

fn paired_line(name: &str, code: &str) -> String {
    match (name.trim().is_empty(), code.trim().is_empty()) {
        (true, true) => PLACEHOLDER.to_string(),
        (false, false) => format!("{name} ({code})"),
        (false, true) => name.to_string(),
        (true, false) => code.to_string(),
    }
}
