//! Multi-strategy search for other occurrences of an event.
//!
//! The upstream search endpoint accepts different query parameter names
//! depending on deployment (`q`, `search`, or `query`), so strategies are
//! tried in a fixed order with per-strategy failure containment. The
//! matcher never raises: every failure path degrades to an empty result.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use super::normalize::normalize_title;
use crate::error::FetchError;
use crate::record::{RawRecord, CITY_ALIASES, STARTS_AT_ALIASES, TITLE_ALIASES, VENUE_ALIASES};
use crate::timestamp::parse_iso_utc;

/// Query parameter names tried in order against the search endpoint.
pub const SEARCH_PARAM_KEYS: &[&str] = &["q", "search", "query"];

const SEARCH_ORDERING: &str = "starts_at_utc";
const SEARCH_LIMIT: &str = "250";

/// The reference occurrence to find siblings of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    /// Upstream id in string form; the matching record itself is excluded.
    pub id: String,
    /// Raw title as upstream sent it; used verbatim in search queries.
    pub title: String,
    pub city: Option<String>,
}

impl MatchQuery {
    pub fn new(id: impl Into<String>, title: impl Into<String>, city: Option<String>) -> Self {
        MatchQuery {
            id: id.into(),
            title: title.into(),
            city,
        }
    }

    /// Build from a raw performance record. `None` when the record has no
    /// id or no title, in which case no matching is possible.
    pub fn from_raw(record: &RawRecord) -> Option<Self> {
        let id = record.id()?;
        let title = record.first_str(TITLE_ALIASES)?.to_string();
        let city = record.first_str(CITY_ALIASES).map(str::to_string);
        Some(MatchQuery { id, title, city })
    }
}

/// One matching occurrence of the reference event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceRecord {
    pub id: String,
    pub normalized_title: String,
    pub city: Option<String>,
    pub venue_name: Option<String>,
    /// Raw ISO start string. For ISO-8601 UTC, lexical order is
    /// chronological order, so this doubles as the sort key.
    pub starts_at: String,
}

impl PerformanceRecord {
    /// Extract from a raw record; `None` when id, title, or the start
    /// timestamp field is missing entirely.
    pub fn from_raw(record: &RawRecord) -> Option<Self> {
        Some(PerformanceRecord {
            id: record.id()?,
            normalized_title: normalize_title(record.first_str(TITLE_ALIASES)?),
            city: record.first_str(CITY_ALIASES).map(str::to_string),
            venue_name: record.first_str(VENUE_ALIASES).map(str::to_string),
            starts_at: record.first_str(STARTS_AT_ALIASES)?.to_string(),
        })
    }
}

/// Capability for fetching candidate records; supplied by the host's API
/// client. Implemented for plain closures so tests and adapters stay
/// lightweight.
pub trait CandidateSource {
    fn fetch(&self, params: &HashMap<String, String>) -> Result<Vec<RawRecord>, FetchError>;
}

impl<F> CandidateSource for F
where
    F: Fn(&HashMap<String, String>) -> Result<Vec<RawRecord>, FetchError>,
{
    fn fetch(&self, params: &HashMap<String, String>) -> Result<Vec<RawRecord>, FetchError> {
        self(params)
    }
}

/// Find other occurrences of the reference event, sorted ascending by
/// start time.
///
/// Strategies run in [`SEARCH_PARAM_KEYS`] order until one returns a
/// non-empty candidate set; fetch failures are contained per strategy.
/// Candidates survive when their normalized title equals the reference's,
/// they are not the reference itself, they carry a start timestamp field,
/// and that timestamp is future or unparseable (an ambiguous record is
/// surfaced rather than silently lost). City only filters when both sides
/// have one.
pub fn find_other_occurrences(
    reference: &MatchQuery,
    source: &impl CandidateSource,
    now: DateTime<Utc>,
) -> Vec<PerformanceRecord> {
    let wanted_title = normalize_title(&reference.title);
    if wanted_title.is_empty() {
        return Vec::new();
    }

    let city_ref = reference
        .city
        .as_deref()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty());

    let candidates = fetch_candidates(&reference.title, source);

    let mut out: Vec<PerformanceRecord> = candidates
        .iter()
        .filter_map(PerformanceRecord::from_raw)
        .filter(|perf| perf.id != reference.id)
        .filter(|perf| perf.normalized_title == wanted_title)
        .filter(|perf| match parse_iso_utc(&perf.starts_at) {
            Some(dt) => dt >= now,
            // keep on parse failure: better an ambiguous row than a lost one
            None => true,
        })
        .filter(|perf| {
            let city = perf
                .city
                .as_deref()
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty());
            match (&city_ref, &city) {
                (Some(a), Some(b)) => a == b,
                _ => true,
            }
        })
        .collect();

    out.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));
    out
}

fn fetch_candidates(raw_title: &str, source: &impl CandidateSource) -> Vec<RawRecord> {
    for key in SEARCH_PARAM_KEYS {
        let params = HashMap::from([
            (key.to_string(), raw_title.to_string()),
            ("ordering".to_string(), SEARCH_ORDERING.to_string()),
            ("limit".to_string(), SEARCH_LIMIT.to_string()),
        ]);
        match source.fetch(&params) {
            Ok(rows) if !rows.is_empty() => {
                debug!(strategy = %key, count = rows.len(), "candidate fetch succeeded");
                return rows;
            }
            Ok(_) => debug!(strategy = %key, "candidate fetch returned no rows"),
            Err(e) => warn!(strategy = %key, error = %e, "candidate fetch failed"),
        }
    }
    Vec::new()
}
