//! Display helpers for timesheet front ends.
//!
//! Formatting is not part of the calculation; these helpers exist so every
//! front end labels days and rounds figures the same way.

use chrono::{NaiveDate, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::DayResult;

/// Language used for day labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Spanish day names ("Lunes", "Martes", ...).
    #[default]
    Spanish,
    /// English day names ("Monday", "Tuesday", ...).
    English,
}

/// Returns the localized name of a weekday.
///
/// # Example
///
/// ```
/// use overtime_engine::display::{Locale, day_name};
/// use chrono::Weekday;
///
/// assert_eq!(day_name(Weekday::Wed, Locale::Spanish), "Miércoles");
/// assert_eq!(day_name(Weekday::Sat, Locale::English), "Saturday");
/// ```
pub fn day_name(weekday: Weekday, locale: Locale) -> &'static str {
    match locale {
        Locale::Spanish => match weekday {
            Weekday::Mon => "Lunes",
            Weekday::Tue => "Martes",
            Weekday::Wed => "Miércoles",
            Weekday::Thu => "Jueves",
            Weekday::Fri => "Viernes",
            Weekday::Sat => "Sábado",
            Weekday::Sun => "Domingo",
        },
        Locale::English => match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        },
    }
}

/// Formats a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Rounds to two decimal places, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats hours with exactly two decimals (e.g. `10.50`).
///
/// # Example
///
/// ```
/// use overtime_engine::display::format_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_hours(Decimal::new(105, 1)), "10.50");
/// ```
pub fn format_hours(hours: Decimal) -> String {
    format!("{:.2}", round2(hours))
}

/// Formats an amount as currency with two decimals (e.g. `$1600.00`).
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", round2(amount))
}

/// Returns true when a day should carry the "2x" weekend-worked marker.
pub fn weekend_worked(day: &DayResult) -> bool {
    day.is_weekend && day.is_worked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_spanish_week_labels() {
        let names: Vec<&str> = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .map(|d| day_name(d, Locale::default()))
        .collect();

        assert_eq!(
            names,
            vec!["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"]
        );
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2026");
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(dec("0.125")), dec("0.13"));
        assert_eq!(round2(dec("2.675")), dec("2.68"));
        assert_eq!(round2(dec("1") / dec("3")), dec("0.33"));
    }

    #[test]
    fn test_format_hours_and_currency() {
        assert_eq!(format_hours(dec("20") / dec("60")), "0.33");
        assert_eq!(format_hours(Decimal::ZERO), "0.00");
        assert_eq!(format_currency(dec("1600")), "$1600.00");
        assert_eq!(format_currency(dec("109.55875")), "$109.56");
    }

    #[test]
    fn test_weekend_worked_marker() {
        let saturday = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let idle = DayResult::empty(saturday, true);
        let worked = DayResult {
            worked_hours: dec("4"),
            ..DayResult::empty(saturday, true)
        };
        let weekday = DayResult {
            worked_hours: dec("4"),
            ..DayResult::empty(saturday.pred_opt().unwrap(), false)
        };

        assert!(!weekend_worked(&idle));
        assert!(weekend_worked(&worked));
        assert!(!weekend_worked(&weekday));
    }
}
