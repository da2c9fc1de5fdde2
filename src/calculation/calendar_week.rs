//! Calendar week derivation and weekend detection.
//!
//! Weeks start on Monday. A Sunday belongs to the week that started six
//! days earlier. Dates are plain calendar dates with no time zone attached.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Number of days in a calculated week.
pub const DAYS_IN_WEEK: usize = 7;

/// Returns the Monday of the week containing `reference` (inclusive).
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::week_start;
/// use chrono::NaiveDate;
///
/// // 2026-10-18 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
/// ```
pub fn week_start(reference: NaiveDate) -> NaiveDate {
    let days_since_monday = i64::from(reference.weekday().num_days_from_monday());
    reference - Duration::days(days_since_monday)
}

/// Returns the seven dates, Monday through Sunday, of the week containing `reference`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::week_dates;
/// use chrono::{Datelike, NaiveDate, Weekday};
///
/// // 2026-10-15 is a Thursday
/// let dates = week_dates(NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
/// assert_eq!(dates[6].weekday(), Weekday::Sun);
/// ```
pub fn week_dates(reference: NaiveDate) -> [NaiveDate; DAYS_IN_WEEK] {
    let monday = week_start(reference);
    std::array::from_fn(|offset| monday + Duration::days(offset as i64))
}

/// Returns true for Saturdays and Sundays.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap())); // Saturday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())); // Friday
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
