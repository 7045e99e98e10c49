//! PRO subscription plan quoting.
//!
//! The PRO cart sells monitoring in monthly bundles (`"1m"`..`"12m"`) or
//! as a flat per-event plan. Period strings come straight from the form
//! and are untrusted.

use rust_decimal::Decimal;

use super::models::PlanQuote;
use crate::money::quantize_cents;

/// Days of coverage per subscribed month.
const DAYS_PER_MONTH: u32 = 30;

/// Days of coverage for the flat per-event plan.
const EVENT_PLAN_DAYS: u32 = 60;

/// Quote a PRO plan from its period string.
///
/// `"<n>m"` buys `n` months clamped to 1..=12 (an unparseable count reads
/// as 1) at `monthly_price` each. A missing/blank period means `"1m"`.
/// Any other period is the per-event plan: zero months, 60 days, one
/// `monthly_price`.
pub fn plan_quote(period: &str, monthly_price: Decimal) -> PlanQuote {
    let mut period = period.trim().to_lowercase();
    if period.is_empty() {
        period = "1m".to_string();
    }

    if let Some(count) = period.strip_suffix('m') {
        let months = count.parse::<u32>().unwrap_or(1).clamp(1, 12);
        return PlanQuote {
            months,
            days: DAYS_PER_MONTH * months,
            price: quantize_cents(monthly_price * Decimal::from(months)),
        };
    }

    PlanQuote {
        months: 0,
        days: EVENT_PLAN_DAYS,
        price: quantize_cents(monthly_price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_plans() {
        let q = plan_quote("1m", dec!(6.99));
        assert_eq!(q, PlanQuote { months: 1, days: 30, price: dec!(6.99) });

        let q = plan_quote("3m", dec!(6.99));
        assert_eq!(q, PlanQuote { months: 3, days: 90, price: dec!(20.97) });

        let q = plan_quote("12m", dec!(6.99));
        assert_eq!(q, PlanQuote { months: 12, days: 360, price: dec!(83.88) });
    }

    #[test]
    fn test_months_clamped_to_valid_range() {
        assert_eq!(plan_quote("0m", dec!(6.99)).months, 1);
        assert_eq!(plan_quote("99m", dec!(6.99)).months, 12);
    }

    #[test]
    fn test_unparseable_month_count_reads_as_one() {
        let q = plan_quote("xm", dec!(6.99));
        assert_eq!(q.months, 1);
        assert_eq!(q.price, dec!(6.99));
    }

    #[test]
    fn test_event_plan_is_flat() {
        let q = plan_quote("evento", dec!(6.99));
        assert_eq!(q, PlanQuote { months: 0, days: 60, price: dec!(6.99) });
    }

    #[test]
    fn test_blank_period_defaults_to_one_month() {
        let q = plan_quote("", dec!(6.99));
        assert_eq!(q, PlanQuote { months: 1, days: 30, price: dec!(6.99) });
        assert_eq!(plan_quote("   ", dec!(6.99)).days, 30);
    }

    #[test]
    fn test_period_is_case_and_space_insensitive() {
        assert_eq!(plan_quote("  2M ", dec!(5.00)).price, dec!(10.00));
    }
}
