//! Worked-hours calculation from clock-in/clock-out pairs.
//!
//! Times are wall-clock times on the same day. A clock-out at or before the
//! clock-in is not wrapped over midnight; it yields zero hours.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

const MINUTES_PER_HOUR: i64 = 60;

/// Returns the minute of the day (0..1440) for a wall-clock time.
///
/// Seconds are ignored.
pub fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * MINUTES_PER_HOUR + i64::from(time.minute())
}

/// Calculates worked minutes between a clock-in and a clock-out.
///
/// Returns zero when either time is missing or when the clock-out is not
/// after the clock-in.
pub fn worked_minutes(clock_in: Option<NaiveTime>, clock_out: Option<NaiveTime>) -> i64 {
    let (Some(start), Some(end)) = (clock_in, clock_out) else {
        return 0;
    };

    (minute_of_day(end) - minute_of_day(start)).max(0)
}

/// Calculates worked hours between a clock-in and a clock-out.
///
/// The result is `minutes / 60` with no rounding; rounding for display is
/// left to the caller.
///
/// # Examples
///
/// ```
/// use overtime_engine::calculation::worked_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let start = NaiveTime::from_hms_opt(8, 0, 0);
/// let end = NaiveTime::from_hms_opt(18, 30, 0);
/// assert_eq!(worked_hours(start, end), Decimal::from_str("10.5").unwrap());
///
/// // No overnight wrap-around
/// let late = NaiveTime::from_hms_opt(22, 0, 0);
/// let early = NaiveTime::from_hms_opt(6, 0, 0);
/// assert_eq!(worked_hours(late, early), Decimal::ZERO);
///
/// // Missing clock-out
/// assert_eq!(worked_hours(start, None), Decimal::ZERO);
/// ```
pub fn worked_hours(clock_in: Option<NaiveTime>, clock_out: Option<NaiveTime>) -> Decimal {
    let minutes = worked_minutes(clock_in, clock_out);
    if minutes == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}
