//! Per-day and per-week result models.
//!
//! These types are derived, never stored. They are recomputed from the
//! recorded entries every time a week is calculated.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The hours, overtime tiers and pay for one calendar date.
///
/// `double_hours + triple_hours` always equals `overtime_hours`.
///
/// # Example
///
/// ```
/// use overtime_engine::models::DayResult;
/// use chrono::NaiveDate;
///
/// let day = DayResult::empty(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(), true);
/// assert!(!day.is_worked());
/// assert!(day.is_weekend);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// The calendar date.
    pub date: NaiveDate,
    /// Hours between clock-in and clock-out (zero when incomplete or non-chronological).
    pub worked_hours: Decimal,
    /// Whether the date is a Saturday or Sunday.
    pub is_weekend: bool,
    /// Hours beyond the daily threshold.
    pub overtime_hours: Decimal,
    /// Overtime hours paid at the double rate.
    pub double_hours: Decimal,
    /// Overtime hours paid at the triple rate.
    pub triple_hours: Decimal,
    /// Flat base pay for the day.
    pub base_pay: Decimal,
    /// Pay for the double and triple overtime hours.
    pub overtime_pay: Decimal,
}

impl DayResult {
    /// A date with no recorded work.
    pub fn empty(date: NaiveDate, is_weekend: bool) -> Self {
        Self {
            date,
            worked_hours: Decimal::ZERO,
            is_weekend,
            overtime_hours: Decimal::ZERO,
            double_hours: Decimal::ZERO,
            triple_hours: Decimal::ZERO,
            base_pay: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
        }
    }

    /// Returns true when any positive hours were worked.
    pub fn is_worked(&self) -> bool {
        self.worked_hours > Decimal::ZERO
    }

    /// Base pay plus overtime pay, stopping at `Decimal::MAX`.
    pub fn total_pay(&self) -> Decimal {
        self.base_pay
            .checked_add(self.overtime_pay)
            .unwrap_or(Decimal::MAX)
    }
}

/// A row of the weekly report: the recorded times next to the day's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRow {
    /// Recorded clock-in, if any.
    #[serde(with = "super::entry::clock_time", default)]
    pub clock_in: Option<NaiveTime>,
    /// Recorded clock-out, if any.
    #[serde(with = "super::entry::clock_time", default)]
    pub clock_out: Option<NaiveTime>,
    /// The computed result for the date.
    #[serde(flatten)]
    pub result: DayResult,
}

/// Weekly totals over the seven days of one Monday-start week.
///
/// # Example
///
/// ```
/// use overtime_engine::models::WeekSummary;
/// use rust_decimal::Decimal;
///
/// let summary = WeekSummary::default();
/// assert_eq!(summary.grand_total_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSummary {
    /// Total worked hours.
    pub total_hours: Decimal,
    /// Total hours beyond the daily threshold.
    pub overtime_hours: Decimal,
    /// Total double-rate overtime hours.
    pub double_hours: Decimal,
    /// Total triple-rate overtime hours.
    pub triple_hours: Decimal,
    /// Total base pay.
    pub base_pay: Decimal,
    /// Total overtime pay.
    pub overtime_pay: Decimal,
    /// Base pay plus overtime pay.
    pub grand_total_pay: Decimal,
    /// Number of days with positive worked hours.
    pub days_worked: u32,
}
