//! Display formatting helpers

use chrono::{DateTime, NaiveDateTime};

/// Shown for a missing timestamp
pub const MISSING: &str = "-";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format an API timestamp for the table.
///
/// Accepts RFC 3339 (`2024-03-01T10:15:00+01:00`) and naive ISO timestamps
/// with or without fractional seconds. Timestamps are shown in their own
/// offset. Anything unparseable is shown as received.
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return MISSING.to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

/// Value for a `datetime-local` input (`YYYY-MM-DDTHH:MM`), empty when the
/// timestamp is missing or unparseable
pub fn datetime_local_value(value: Option<&str>) -> String {
    const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return String::new();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(INPUT_FORMAT).to_string();
    }
    ["%Y-%m-%dT%H:%M:%S%.f", INPUT_FORMAT]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}
