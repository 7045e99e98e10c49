//! Safe decimal money handling.
//!
//! Pure functions for monetary parsing and rounding - no I/O, no panics.
//! Every monetary field coming from the upstream ticketing API passes
//! through [`parse_money`] before arithmetic so malformed values degrade
//! to a default instead of failing the page.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde_json::Value;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias and
/// keeps totals identical across the checkout, payment, and confirmation pages.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use boxoffice_core::money::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Quantize to whole cents (2 decimal places, banker's rounding).
pub fn quantize_cents(amount: Decimal) -> Decimal {
    round_money(amount, 2)
}

/// Parse an untrusted JSON value into a `Decimal`, defaulting to zero.
///
/// Accepts JSON strings (trimmed before parsing) and numbers. `null`,
/// missing fields, booleans, objects, and unparseable strings all read
/// as zero. Never panics, never returns an error.
pub fn parse_money(value: Option<&Value>) -> Decimal {
    parse_money_or(value, Decimal::ZERO)
}

/// Parse an untrusted JSON value into a `Decimal` with an explicit fallback.
pub fn parse_money_or(value: Option<&Value>, default: Decimal) -> Decimal {
    let value = match value {
        Some(v) => v,
        None => return default,
    };
    match value {
        Value::String(s) => s.trim().parse::<Decimal>().unwrap_or(default),
        // serde_json renders numbers with their source digits, so going
        // through the literal avoids binary-float drift on values like 0.1
        Value::Number(n) => {
            let literal = n.to_string();
            literal
                .parse::<Decimal>()
                .or_else(|_| Decimal::from_scientific(&literal))
                .unwrap_or(default)
        }
        _ => default,
    }
}
