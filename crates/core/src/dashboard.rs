//! Project dashboard arithmetic.
//!
//! The database layer gathers raw counts and sums; the functions here turn
//! them into the whole-number metrics shown on the dashboard.

use chrono::Duration;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Timestamp;

/// Activities dated within this many days of "now" count as recent.
pub const RECENT_ACTIVITY_WINDOW_DAYS: i64 = 7;

/// Earliest activity date that still counts as recent at `now`.
pub fn recent_cutoff(now: Timestamp) -> Timestamp {
    now - Duration::days(RECENT_ACTIVITY_WINDOW_DAYS)
}

/// Round to the nearest whole number, halves away from zero.
pub fn round_to_whole(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Mean progress across a project's activities, rounded; 0 with no activities.
pub fn overall_progress(average_progress: Option<Decimal>) -> i64 {
    average_progress.map(round_to_whole).unwrap_or(0)
}

/// Percentage of the budget consumed by approved or paid applications.
///
/// Returns 0 when the project has no budget, a zero budget, or nothing spent.
pub fn budget_utilization(spent: Option<Decimal>, budget: Option<Decimal>) -> i64 {
    let (Some(spent), Some(budget)) = (spent, budget) else {
        return 0;
    };
    if budget.is_zero() || spent.is_zero() {
        return 0;
    }
    spent
        .checked_div(budget)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(round_to_whole)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_overall_progress_without_activities_is_zero() {
        assert_eq!(overall_progress(None), 0);
    }

    #[test]
    fn test_overall_progress_rounds_mean() {
        // mean of 50 and 30
        assert_eq!(overall_progress(Some(dec("40.000000"))), 40);
        assert_eq!(overall_progress(Some(dec("33.3333333"))), 33);
        assert_eq!(overall_progress(Some(dec("66.6666667"))), 67);
    }

    #[test]
    fn test_round_to_whole_half_goes_up() {
        assert_eq!(round_to_whole(dec("12.5")), 13);
        assert_eq!(round_to_whole(dec("0.5")), 1);
        assert_eq!(round_to_whole(dec("0.49")), 0);
    }

    #[test]
    fn test_budget_utilization_quarter_spent() {
        assert_eq!(
            budget_utilization(Some(dec("25000.00")), Some(dec("100000.00"))),
            25
        );
    }

    #[test]
    fn test_budget_utilization_without_budget_is_zero() {
        assert_eq!(budget_utilization(Some(dec("25000.00")), None), 0);
    }

    #[test]
    fn test_budget_utilization_zero_budget_is_zero() {
        assert_eq!(budget_utilization(Some(dec("10.00")), Some(Decimal::ZERO)), 0);
    }

    #[test]
    fn test_budget_utilization_nothing_spent_is_zero() {
        assert_eq!(budget_utilization(None, Some(dec("100000.00"))), 0);
        assert_eq!(budget_utilization(Some(Decimal::ZERO), Some(dec("100000.00"))), 0);
    }

    #[test]
    fn test_budget_utilization_can_exceed_hundred() {
        assert_eq!(budget_utilization(Some(dec("150.00")), Some(dec("100.00"))), 150);
    }

    #[test]
    fn test_budget_utilization_rounds() {
        // 1/3 of the budget
        assert_eq!(budget_utilization(Some(dec("1.00")), Some(dec("3.00"))), 33);
    }

    #[test]
    fn test_recent_cutoff_is_seven_days_back() {
        let now = chrono::Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let expected = chrono::Utc.with_ymd_and_hms(2026, 3, 3, 12, 0, 0).unwrap();
        assert_eq!(recent_cutoff(now), expected);
    }
}
