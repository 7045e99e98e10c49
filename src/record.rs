//! Untyped upstream records with ordered field-alias resolution.
//!
//! The ticketing API is inconsistent about field names (`evento_nome` vs
//! `title`, `starts_at_utc` vs `starts_at`) and about nesting: listing and
//! subscription payloads wrap the performance fields in a
//! `performance_info` object, search payloads do not. [`RawRecord`] owns
//! that resolution in one place so call sites never repeat alias chains.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Nested objects that may carry the event/performance fields, searched
/// before the record's own fields.
const NESTED_INFO_KEYS: &[&str] = &["performance_info", "evento_info", "event_info"];

/// Title aliases, most specific first.
pub const TITLE_ALIASES: &[&str] = &["evento_nome", "title"];
/// Start-timestamp aliases, most specific first.
pub const STARTS_AT_ALIASES: &[&str] = &["starts_at_utc", "starts_at"];
/// City aliases.
pub const CITY_ALIASES: &[&str] = &["citta", "city"];
/// Venue-name aliases.
pub const VENUE_ALIASES: &[&str] = &["luogo_nome", "venue_name", "venue"];
/// Creation-timestamp aliases on subscription/alert records.
pub const CREATED_AT_ALIASES: &[&str] = &["created_at", "creato_il", "abbonamento_created_at"];
/// Expiry aliases on subscription/alert records.
pub const EXPIRES_AT_ALIASES: &[&str] = &["expires_at", "scade_il", "valid_until"];
/// Completion-timestamp aliases on subscription/alert records.
pub const COMPLETED_AT_ALIASES: &[&str] = &["done_at", "success_at", "notified_at"];

/// One raw upstream JSON record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub Value);

impl RawRecord {
    /// Unwrap an upstream list response: either `{"results": [...]}` or a
    /// bare array. Non-object entries and anything else yield an empty list.
    pub fn list_from_response(value: Value) -> Vec<RawRecord> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(items)) => items,
                _ => return Vec::new(),
            },
            _ => return Vec::new(),
        };
        items
            .into_iter()
            .filter(|v| v.is_object())
            .map(RawRecord)
            .collect()
    }

    /// Raw value for a single field on this record.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The nested `performance_info` object, when present.
    pub fn performance_info(&self) -> Option<&Value> {
        self.0.get("performance_info").filter(|v| v.is_object())
    }

    /// The nested info objects (performance, then event), followed by the
    /// record itself. Listing and subscription payloads nest their event
    /// fields; search payloads keep them flat.
    fn scopes(&self) -> impl Iterator<Item = &Value> {
        NESTED_INFO_KEYS
            .iter()
            .filter_map(|key| self.0.get(key).filter(|v| v.is_object()))
            .chain(std::iter::once(&self.0))
    }

    /// First non-empty string among `aliases`, checked on the nested info
    /// objects first and then on the record itself.
    pub fn first_str(&self, aliases: &[&str]) -> Option<&str> {
        for scope in self.scopes() {
            for name in aliases {
                if let Some(s) = scope.get(name).and_then(Value::as_str) {
                    let s = s.trim();
                    if !s.is_empty() {
                        return Some(s);
                    }
                }
            }
        }
        None
    }

    /// Record id rendered as a string; upstream sends both numeric and
    /// string ids, so comparisons happen on the string form.
    ///
    /// Only `performance_info` and the record itself are consulted: the
    /// id inside `evento_info` is the event's, not the occurrence's.
    pub fn id(&self) -> Option<String> {
        let scopes = [self.performance_info(), Some(&self.0)];
        for scope in scopes.into_iter().flatten() {
            match scope.get("id") {
                Some(Value::String(s)) if !s.trim().is_empty() => {
                    return Some(s.trim().to_string())
                }
                Some(Value::Number(n)) => return Some(n.to_string()),
                _ => {}
            }
        }
        None
    }

    /// Boolean field with upstream looseness: JSON `true`, a non-zero
    /// number, or the strings `"true"`/`"1"` all count as set.
    pub fn flag(&self, name: &str) -> bool {
        match self.0.get(name) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => {
                let s = s.trim().to_lowercase();
                s == "true" || s == "1"
            }
            _ => false,
        }
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        RawRecord(value)
    }
}
