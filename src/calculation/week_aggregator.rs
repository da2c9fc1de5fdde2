//! Weekly totals over per-day results.

use rust_decimal::Decimal;

use crate::models::{DayResult, WeekSummary};

/// Folds day results into weekly totals.
///
/// Every numeric field is summed; `grand_total_pay` is total base pay plus
/// total overtime pay. Days without work contribute zeros. Sums that would
/// leave the `Decimal` range stop at `Decimal::MAX`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::summarize_week;
/// use overtime_engine::models::DayResult;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
/// let worked = DayResult {
///     worked_hours: Decimal::from(10),
///     base_pay: Decimal::from(800),
///     ..DayResult::empty(monday, false)
/// };
/// let idle = DayResult::empty(monday.succ_opt().unwrap(), false);
///
/// let summary = summarize_week(&[worked, idle]);
/// assert_eq!(summary.total_hours, Decimal::from(10));
/// assert_eq!(summary.grand_total_pay, Decimal::from(800));
/// assert_eq!(summary.days_worked, 1);
/// ```
pub fn summarize_week(days: &[DayResult]) -> WeekSummary {
    let mut summary = days
        .iter()
        .fold(WeekSummary::default(), |mut acc, day| {
            acc.total_hours = add(acc.total_hours, day.worked_hours);
            acc.overtime_hours = add(acc.overtime_hours, day.overtime_hours);
            acc.double_hours = add(acc.double_hours, day.double_hours);
            acc.triple_hours = add(acc.triple_hours, day.triple_hours);
            acc.base_pay = add(acc.base_pay, day.base_pay);
            acc.overtime_pay = add(acc.overtime_pay, day.overtime_pay);
            if day.is_worked() {
                acc.days_worked += 1;
            }
            acc
        });

    summary.grand_total_pay = add(summary.base_pay, summary.overtime_pay);
    summary
}

/// Returns true when the summary's overtime tiers add up to its overtime.
pub fn tiers_balance(summary: &WeekSummary) -> bool {
    summary.double_hours.checked_add(summary.triple_hours) == Some(summary.overtime_hours)
        && summary.overtime_hours >= Decimal::ZERO
}

// All summed fields are non-negative, so overflow can only go upward.
fn add(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or(Decimal::MAX)
}
