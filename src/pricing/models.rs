//! Quote models shared by the pricing functions.
//!
//! Output types serialize money as strings (like the upstream API does)
//! so templates and JSON endpoints render stable figures.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::money::parse_money;
use crate::record::RawRecord;

/// The upstream preview/order fields after safe parsing.
///
/// Absent or malformed fields read as zero; the reconciler treats a
/// non-positive field as "not provided" and derives it locally. Partial
/// responses (subtotal present, commission missing) are the common case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialPriceQuote {
    pub unit_price: Decimal,
    pub subtotal: Decimal,
    pub commission: Decimal,
    pub total: Decimal,
}

impl PartialPriceQuote {
    /// Extract the quote fields from a raw upstream record.
    ///
    /// The total resolves through `total` | `total_price`; order payloads
    /// use one name, preview payloads the other. A missing, blank, or
    /// zero `total` falls through to the alias.
    pub fn from_raw(record: &RawRecord) -> Self {
        PartialPriceQuote {
            unit_price: parse_money(record.field("unit_price")),
            subtotal: parse_money(record.field("subtotal")),
            commission: parse_money(record.field("commission")),
            total: parse_money(
                record
                    .field("total")
                    .filter(|v| total_provided(v))
                    .or_else(|| record.field("total_price")),
            ),
        }
    }
}

/// Does this `total` value actually carry a total? Null, blank, and zero
/// values do not; an unparseable string still does (it reads as zero
/// without consulting the alias).
fn total_provided(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !s.is_empty() && s.parse::<Decimal>().map_or(true, |d| !d.is_zero())
        }
        _ => true,
    }
}

/// Name-change surcharge decision for one point in time.
///
/// Computed fresh on every call from the event start and `now`; never
/// persisted and never taken from upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurchargeDecision {
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
    pub required: bool,
    pub message: String,
}

/// A complete, reconciled price quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub commission: Decimal,
    pub surcharge: SurchargeDecision,
    #[serde(with = "rust_decimal::serde::str")]
    pub final_total: Decimal,
}

/// A quoted PRO subscription plan.
///
/// `months` is zero for the flat per-event plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanQuote {
    pub months: u32,
    pub days: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_partial_quote_from_raw_mixed_types() {
        let rec = RawRecord(json!({
            "unit_price": "50.00",
            "subtotal": 100,
            "commission": null,
            "total": "bad-value"
        }));
        let q = PartialPriceQuote::from_raw(&rec);
        assert_eq!(q.unit_price, dec!(50.00));
        assert_eq!(q.subtotal, dec!(100));
        assert_eq!(q.commission, dec!(0));
        assert_eq!(q.total, dec!(0));
    }

    #[test]
    fn test_partial_quote_total_price_alias() {
        let rec = RawRecord(json!({"total_price": "110.00"}));
        assert_eq!(PartialPriceQuote::from_raw(&rec).total, dec!(110.00));

        // explicit total wins over the alias
        let rec = RawRecord(json!({"total": "99.00", "total_price": "110.00"}));
        assert_eq!(PartialPriceQuote::from_raw(&rec).total, dec!(99.00));

        // a null total falls through to the alias
        let rec = RawRecord(json!({"total": null, "total_price": "110.00"}));
        assert_eq!(PartialPriceQuote::from_raw(&rec).total, dec!(110.00));
    }

    #[test]
    fn test_partial_quote_zero_total_falls_through() {
        let rec = RawRecord(json!({"total": 0, "total_price": "110.00"}));
        assert_eq!(PartialPriceQuote::from_raw(&rec).total, dec!(110.00));

        let rec = RawRecord(json!({"total": "0.00", "total_price": "110.00"}));
        assert_eq!(PartialPriceQuote::from_raw(&rec).total, dec!(110.00));

        let rec = RawRecord(json!({"total": "", "total_price": "110.00"}));
        assert_eq!(PartialPriceQuote::from_raw(&rec).total, dec!(110.00));

        // an unparseable total is carried (as zero), not aliased away
        let rec = RawRecord(json!({"total": "abc", "total_price": "110.00"}));
        assert_eq!(PartialPriceQuote::from_raw(&rec).total, dec!(0));
    }

    #[test]
    fn test_partial_quote_empty_record() {
        let q = PartialPriceQuote::from_raw(&RawRecord(json!({})));
        assert_eq!(q, PartialPriceQuote::default());
    }

    #[test]
    fn test_price_quote_serializes_money_as_strings() {
        let quote = PriceQuote {
            unit_price: dec!(50.00),
            subtotal: dec!(100.00),
            commission: dec!(10.00),
            surcharge: SurchargeDecision {
                fee: dec!(3.50),
                required: true,
                message: "fee applies".to_string(),
            },
            final_total: dec!(113.50),
        };
        let v = serde_json::to_value(&quote).unwrap();
        assert_eq!(v["subtotal"], json!("100.00"));
        assert_eq!(v["surcharge"]["fee"], json!("3.50"));
        assert_eq!(v["final_total"], json!("113.50"));
    }
}
