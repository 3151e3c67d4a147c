use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// whole days between two calendar dates, clamped at zero
pub fn elapsed_days(from: NaiveDate, to: NaiveDate) -> u32 {
    (to - from).num_days().max(0) as u32
}

/// interest earned by daily compounding over the given number of days
///
/// Computes `principal * ((1 + rate/100/365)^days - 1)` entirely in
/// decimal arithmetic; the running state never touches floating point.
pub fn compound_interest(principal: Money, annual_rate: Rate, days: u32) -> Money {
    if days == 0 || principal.is_zero() {
        return Money::ZERO;
    }

    let base = Decimal::ONE + annual_rate.daily_fraction();
    let mut factor = Decimal::ONE;
    for _ in 0..days {
        factor *= base;
    }

    Money::from_decimal(principal.as_decimal() * (factor - Decimal::ONE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_elapsed_days() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        assert_eq!(elapsed_days(start, end), 31);
        assert_eq!(elapsed_days(start, start), 0);
        // inverted interval clamps to zero rather than going negative
        assert_eq!(elapsed_days(end, start), 0);
    }

    #[test]
    fn test_elapsed_days_across_year_boundary() {
        let start = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(elapsed_days(start, end), 3);
    }

    #[test]
    fn test_zero_days_earns_nothing() {
        let interest = compound_interest(
            Money::from_major(100_000),
            Rate::from_percentage(dec!(13.66)),
            0,
        );
        assert_eq!(interest, Money::ZERO);
    }

    #[test]
    fn test_zero_principal_earns_nothing() {
        let interest = compound_interest(Money::ZERO, Rate::from_percentage(dec!(13.66)), 30);
        assert_eq!(interest, Money::ZERO);
    }

    #[test]
    fn test_single_day_matches_daily_rate() {
        let principal = Money::from_major(100_000);
        let rate = Rate::from_percentage(dec!(13.66));

        let interest = compound_interest(principal, rate, 1);
        let expected = principal.as_decimal() * rate.daily_fraction();
        assert_eq!(interest.as_decimal().round_dp(6), expected.round_dp(6));
    }

    #[test]
    fn test_full_year_at_product_rate() {
        // 100,000 at 13.66% p.a. compounded daily for 365 days
        let interest = compound_interest(
            Money::from_major(100_000),
            Rate::from_percentage(dec!(13.66)),
            365,
        );
        let rounded = interest.round_dp(0).as_decimal();
        assert!(rounded >= dec!(14632) && rounded <= dec!(14637), "got {}", rounded);
    }

    #[test]
    fn test_compounding_beats_simple_interest() {
        let principal = Money::from_major(10_000);
        let rate = Rate::from_percentage(dec!(10));

        let compound = compound_interest(principal, rate, 365);
        let simple = principal.as_decimal() * rate.daily_fraction() * dec!(365);
        assert!(compound.as_decimal() > simple);
    }

    #[test]
    fn test_split_interval_compounds_like_whole() {
        // accruing 30 then 70 days with capitalization equals one 100-day run
        let principal = Money::from_major(250_000);
        let rate = Rate::from_percentage(dec!(14.16));

        let first = compound_interest(principal, rate, 30);
        let grown = principal + first;
        let second = compound_interest(grown, rate, 70);
        let split_total = first + second;

        let whole = compound_interest(principal, rate, 100);
        let diff = (split_total.as_decimal() - whole.as_decimal()).abs();
        assert!(diff < dec!(0.000001), "split {} vs whole {}", split_total, whole);
    }
}
