//! Lifecycle status classification for subscription/alert records.
//!
//! Precedence is the design decision here: event closure always dominates
//! expiry, which dominates a stale success signal. A monitoring alert
//! whose event already happened is closed no matter what the upstream
//! status string claims.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::record::{
    RawRecord, COMPLETED_AT_ALIASES, CREATED_AT_ALIASES, EXPIRES_AT_ALIASES, STARTS_AT_ALIASES,
};
use crate::timestamp::parse_iso_utc;

/// Upstream status strings that count as a completion signal.
const COMPLETED_STATUSES: &[&str] = &["success", "trovato", "completed", "ok"];

/// Lifecycle standing of a subscription or alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifecycleStatus {
    Pending,
    Active,
    Expired,
    Closed,
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LifecycleStatus::Pending => "Pending",
            LifecycleStatus::Active => "Active",
            LifecycleStatus::Expired => "Expired",
            LifecycleStatus::Closed => "Closed",
        };
        f.write_str(s)
    }
}

/// Read-only view of an upstream subscription/alert record.
///
/// Unparseable date fields are `None` and skip their classification
/// branch rather than matching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleRecord {
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub event_starts_at: Option<DateTime<Utc>>,
    pub completed: bool,
}

impl LifecycleRecord {
    /// Build from a raw upstream record, resolving field aliases.
    ///
    /// Completion is signalled either by a parseable completion timestamp
    /// or by a recognized `status`/`stato` string. An unparseable
    /// timestamp is unknown, not a signal.
    pub fn from_raw(record: &RawRecord) -> Self {
        let status_raw = record
            .field("status")
            .or_else(|| record.field("stato"))
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        let completed = record
            .first_str(COMPLETED_AT_ALIASES)
            .and_then(parse_iso_utc)
            .is_some()
            || COMPLETED_STATUSES.contains(&status_raw.as_str());

        LifecycleRecord {
            created_at: record.first_str(CREATED_AT_ALIASES).and_then(parse_iso_utc),
            expires_at: record.first_str(EXPIRES_AT_ALIASES).and_then(parse_iso_utc),
            event_starts_at: record.first_str(STARTS_AT_ALIASES).and_then(parse_iso_utc),
            completed,
        }
    }
}

/// Classify a record into exactly one lifecycle status.
///
/// Strict order, first match wins:
/// 1. event already started -> `Closed`
/// 2. past expiry -> `Expired`
/// 3. completion signal -> `Active` (an outcome keeps the alert active
///    until expiry or the event itself)
/// 4. otherwise -> `Pending`
///
/// Pure and total; every record maps to a status, never an error.
pub fn classify(record: &LifecycleRecord, now: DateTime<Utc>) -> LifecycleStatus {
    if record.event_starts_at.is_some_and(|dt| dt < now) {
        return LifecycleStatus::Closed;
    }
    if record.expires_at.is_some_and(|dt| dt < now) {
        return LifecycleStatus::Expired;
    }
    if record.completed {
        return LifecycleStatus::Active;
    }
    LifecycleStatus::Pending
}
