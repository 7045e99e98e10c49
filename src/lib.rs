//! Deterministic computation core for the ticket storefront.
//!
//! The surrounding application proxies a remote ticketing API and renders
//! pages from whatever JSON comes back. That JSON is untrusted and
//! inconsistent; this crate turns it into display-ready facts:
//!
//! - [`pricing`] - quote reconciliation and the name-change surcharge
//! - [`lifecycle`] - subscription/alert status classification
//! - [`matching`] - other occurrences of the same event
//! - [`money`], [`timestamp`], [`record`] - the shared parse boundary
//! - [`listings`] - home-page carousel filters
//!
//! Everything is a pure function of its inputs plus an explicit `now`;
//! malformed upstream data degrades to documented defaults instead of
//! erroring, so the page can always render.

pub mod error;
pub mod lifecycle;
pub mod listings;
pub mod matching;
pub mod money;
pub mod pricing;
pub mod record;
pub mod timestamp;

// Re-export commonly used items
pub use error::{FetchError, PricingError};
pub use lifecycle::{classify, LifecycleRecord, LifecycleStatus};
pub use matching::{find_other_occurrences, CandidateSource, MatchQuery, PerformanceRecord};
pub use money::{parse_money, parse_money_or, quantize_cents, round_money};
pub use pricing::{
    evaluate, plan_quote, reconcile, PartialPriceQuote, PlanQuote, PriceQuote, SurchargeDecision,
    DEFAULT_COMMISSION_RATE, NAME_CHANGE_FEE,
};
pub use record::RawRecord;
pub use timestamp::{format_dmy_hm, parse_iso_utc};
