//! Listing-carousel helpers.
//!
//! The home page builds three carousels from the same upstream rows: top
//! listings, events this month, and upcoming events. The backend ignores
//! most of these filters, so they run locally. Shared here instead of
//! being re-implemented per view.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

use crate::matching::PerformanceRecord;
use crate::record::RawRecord;
use crate::timestamp::parse_iso_utc;

/// Is this listing flagged as a "top" listing?
///
/// The backend marks these several ways depending on version: an `is_top`
/// or `top` flag, a `badge` of `"top"`, or a `"top"` entry in `tags`.
pub fn is_top(record: &RawRecord) -> bool {
    if record.flag("is_top") || record.flag("top") {
        return true;
    }
    if record
        .field("badge")
        .and_then(|v| v.as_str())
        .is_some_and(|s| s.trim().eq_ignore_ascii_case("top"))
    {
        return true;
    }
    record
        .field("tags")
        .and_then(|v| v.as_array())
        .is_some_and(|tags| {
            tags.iter()
                .filter_map(|t| t.as_str())
                .any(|t| t.trim().eq_ignore_ascii_case("top"))
        })
}

/// The current UTC month as a closed window: first instant of day one
/// through 23:59:59 on the last day.
pub fn month_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc
        .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .unwrap();
    let next_month = if now.month() == 12 {
        Utc.with_ymd_and_hms(now.year() + 1, 1, 1, 0, 0, 0).unwrap()
    } else {
        Utc.with_ymd_and_hms(now.year(), now.month() + 1, 1, 0, 0, 0)
            .unwrap()
    };
    (start, next_month - Duration::seconds(1))
}

/// Records whose start parses and falls inside `[start, end]`, in input
/// order, at most `limit`. Carousels need a placeable date, so records
/// with unparseable starts are excluded here.
pub fn in_window(
    records: &[PerformanceRecord],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    limit: usize,
) -> Vec<PerformanceRecord> {
    records
        .iter()
        .filter(|r| {
            parse_iso_utc(&r.starts_at).is_some_and(|dt| dt >= start && dt <= end)
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Records whose start parses and is `now` or later, in input order, at
/// most `limit`.
pub fn upcoming(
    records: &[PerformanceRecord],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<PerformanceRecord> {
    records
        .iter()
        .filter(|r| parse_iso_utc(&r.starts_at).is_some_and(|dt| dt >= now))
        .take(limit)
        .cloned()
        .collect()
}
