//! Cross-record date matching: other occurrences of the same event.
//!
//! Finds sibling performances of a reference record among noisy,
//! heterogeneously shaped search results, using normalized-title equality
//! and an ordered chain of query strategies with per-strategy failure
//! containment.

pub mod matcher;
pub mod normalize;

// Re-export commonly used items
pub use matcher::{find_other_occurrences, CandidateSource, MatchQuery, PerformanceRecord};
pub use normalize::normalize_title;
