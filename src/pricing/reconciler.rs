//! Price reconciliation.
//!
//! The upstream preview endpoint is authoritative when it answers, but it
//! routinely answers with zero, partial, or malformed fields. Each quote
//! field independently prefers a positive upstream value and otherwise
//! derives from fixed formulas, so mixed responses reconcile cleanly.
//! This used to be re-implemented per page; every page now calls here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{PartialPriceQuote, PriceQuote};
use super::surcharge;
use crate::error::PricingError;
use crate::money::quantize_cents;

/// Commission rate applied when upstream does not quote one.
pub const DEFAULT_COMMISSION_RATE: Decimal = dec!(0.10);

/// Reconcile an upstream partial quote into a complete [`PriceQuote`].
///
/// Field precedence, applied per field: use the upstream value when it is
/// positive, otherwise derive it. The name-change surcharge is always
/// computed locally from `event_starts_at` and `now`; it is a
/// point-in-time signal, not a committed upstream value.
///
/// Pure and idempotent: identical inputs (including `now`) yield an
/// identical quote, which the checkout, payment, and confirmation pages
/// all rely on.
///
/// # Errors
/// `PricingError::InvalidQuantity` when `qty < 1`. Clamping would corrupt
/// every derived total, so this is rejected at the boundary instead.
pub fn reconcile(
    upstream: &PartialPriceQuote,
    qty: i64,
    unit_price_fallback: Decimal,
    commission_rate: Decimal,
    event_starts_at: Option<&str>,
    now: DateTime<Utc>,
) -> Result<PriceQuote, PricingError> {
    if qty < 1 {
        return Err(PricingError::InvalidQuantity { qty });
    }

    let unit_price = if upstream.unit_price > Decimal::ZERO {
        upstream.unit_price
    } else {
        unit_price_fallback
    };

    let subtotal = if upstream.subtotal > Decimal::ZERO {
        upstream.subtotal
    } else {
        quantize_cents(unit_price * Decimal::from(qty))
    };

    let commission = if upstream.commission > Decimal::ZERO {
        upstream.commission
    } else {
        quantize_cents(subtotal * commission_rate)
    };

    let surcharge = surcharge::evaluate(event_starts_at, now);

    let base_total = if upstream.total > Decimal::ZERO {
        upstream.total
    } else {
        quantize_cents(subtotal + commission)
    };

    let final_total = quantize_cents(base_total + surcharge.fee);

    Ok(PriceQuote {
        unit_price,
        subtotal,
        commission,
        surcharge,
        final_total,
    })
}
