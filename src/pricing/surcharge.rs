//! Name-change surcharge rule.
//!
//! A point-in-time UI signal, never a committed value: the fee applies
//! when at least 24 hours remain before the event starts.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::SurchargeDecision;
use crate::timestamp::parse_iso_utc;

/// Fee charged when a name change is still possible.
pub const NAME_CHANGE_FEE: Decimal = dec!(3.50);

/// Hours before the event start at which the fee stops applying.
pub const NAME_CHANGE_WINDOW_HOURS: i64 = 24;

/// Decide whether the name-change fee applies.
///
/// The 24-hour boundary is inclusive on the fee side: exactly 24 hours
/// before the event still charges the fee. A missing or unparseable start
/// timestamp means no fee.
pub fn evaluate(event_starts_at: Option<&str>, now: DateTime<Utc>) -> SurchargeDecision {
    let starts = event_starts_at.and_then(parse_iso_utc);

    let starts = match starts {
        Some(dt) => dt,
        None => {
            return SurchargeDecision {
                fee: Decimal::ZERO,
                required: false,
                message: "Name change: event date unavailable.".to_string(),
            }
        }
    };

    if starts - now >= Duration::hours(NAME_CHANGE_WINDOW_HOURS) {
        SurchargeDecision {
            fee: NAME_CHANGE_FEE,
            required: true,
            message: "A name-change fee of 3.50 applies beyond 24 hours before the event."
                .to_string(),
        }
    } else {
        SurchargeDecision {
            fee: Decimal::ZERO,
            required: false,
            message: "No name-change fee within 24 hours of the event.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn iso(dt: DateTime<Utc>) -> String {
        dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    #[test]
    fn test_fee_applies_beyond_24_hours() {
        let starts = iso(now() + Duration::hours(48));
        let d = evaluate(Some(&starts), now());
        assert_eq!(d.fee, dec!(3.50));
        assert!(d.required);
    }

    #[test]
    fn test_boundary_exactly_24_hours_is_inclusive() {
        let starts = iso(now() + Duration::hours(24));
        let d = evaluate(Some(&starts), now());
        assert_eq!(d.fee, dec!(3.50));
        assert!(d.required);
    }

    #[test]
    fn test_one_second_inside_24_hours_has_no_fee() {
        let starts = iso(now() + Duration::hours(24) - Duration::seconds(1));
        let d = evaluate(Some(&starts), now());
        assert_eq!(d.fee, dec!(0.00));
        assert!(!d.required);
    }

    #[test]
    fn test_past_event_has_no_fee() {
        let starts = iso(now() - Duration::hours(2));
        let d = evaluate(Some(&starts), now());
        assert_eq!(d.fee, dec!(0.00));
        assert!(!d.required);
    }

    #[test]
    fn test_missing_date_has_no_fee() {
        let d = evaluate(None, now());
        assert_eq!(d.fee, dec!(0.00));
        assert!(!d.required);
        assert!(d.message.contains("unavailable"));
    }

    #[test]
    fn test_unparseable_date_behaves_like_missing() {
        let d = evaluate(Some("soon-ish"), now());
        assert_eq!(d.fee, dec!(0.00));
        assert!(!d.required);
        assert!(d.message.contains("unavailable"));
    }

    #[test]
    fn test_offset_timestamp_normalized_before_comparison() {
        // 25h out in UTC, written with a +02:00 offset
        let starts = (now() + Duration::hours(25)).with_timezone(&chrono::FixedOffset::east_opt(7200).unwrap());
        let d = evaluate(Some(&starts.to_rfc3339()), now());
        assert!(d.required);
    }
}
