//! ISO-8601 timestamp parsing and display formatting.
//!
//! The upstream API emits start and expiry timestamps in several shapes:
//! `2025-12-19T21:30:00Z`, with a numeric offset, or naive with no zone at
//! all. Everything is normalized to UTC before comparison; a naive
//! timestamp is assumed to already be UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse an ISO-8601 string into an aware UTC datetime.
///
/// Accepts a trailing `Z`, a numeric offset, or a zone-less timestamp
/// (assumed UTC). Returns `None` for empty or malformed input.
pub fn parse_iso_utc(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// Format an ISO-8601 string as `dd/mm/YYYY HH:MM` in UTC for display.
///
/// Returns an empty string when the input is missing or unparseable so
/// templates can render it directly.
pub fn format_dmy_hm(s: &str) -> String {
    match parse_iso_utc(s) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => String::new(),
    }
}
