//! Pricing engine for the storefront.
//!
//! Reconciles the upstream API's partial price previews into complete,
//! internally consistent quotes, and computes the time-sensitive
//! name-change surcharge. All functions are pure; the same inputs always
//! produce the same quote, which keeps the checkout, payment, and
//! confirmation pages in agreement.

pub mod models;
pub mod plans;
pub mod reconciler;
pub mod surcharge;

// Re-export commonly used items
pub use models::{PartialPriceQuote, PlanQuote, PriceQuote, SurchargeDecision};
pub use plans::plan_quote;
pub use reconciler::{reconcile, DEFAULT_COMMISSION_RATE};
pub use surcharge::{evaluate, NAME_CHANGE_FEE, NAME_CHANGE_WINDOW_HOURS};
