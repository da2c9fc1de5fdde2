//! Daily salary rate model.
//!
//! The timesheet stores the daily salary as free text. [`RateConfig`] turns
//! that text into a usable rate, or records that it is unusable so that every
//! pay figure resolves to zero while hours keep being computed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest daily salary accepted as valid (10^18).
///
/// A full week at this salary, with every day worked around the clock and
/// paid at the triple tier, stays far inside the `Decimal` range.
pub const MAX_DAILY_SALARY: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// A daily salary figure and whether it can be used for pay.
///
/// # Example
///
/// ```
/// use overtime_engine::models::RateConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = RateConfig::parse("876,47");
/// assert!(rate.is_valid());
/// assert_eq!(rate.daily_salary(), Decimal::from_str("876.47").unwrap());
///
/// let invalid = RateConfig::parse("");
/// assert!(!invalid.is_valid());
/// assert_eq!(invalid.daily_salary(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfig {
    /// The salary text this rate was derived from.
    pub input: String,
    /// The parsed salary; `None` when the input is empty, non-numeric, not
    /// positive or above [`MAX_DAILY_SALARY`].
    daily_salary: Option<Decimal>,
}

impl RateConfig {
    /// Parses salary text.
    ///
    /// Leading/trailing whitespace is ignored and the first comma is read as
    /// a decimal separator. As with a lenient float parse, the longest leading
    /// number (with an optional exponent, so `"8e2"` reads as 800) is taken
    /// and anything after it is ignored, so `"800 MXN"` reads as 800.
    /// Non-positive values and values above [`MAX_DAILY_SALARY`] are invalid.
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().replacen(',', ".", 1);
        let daily_salary = leading_number(&normalized)
            .and_then(|number| to_decimal(&number))
            .filter(|salary| is_usable(*salary));

        Self {
            input: input.to_string(),
            daily_salary,
        }
    }

    /// Builds a rate from an already-numeric daily salary.
    pub fn from_daily_salary(daily_salary: Decimal) -> Self {
        Self {
            input: daily_salary.to_string(),
            daily_salary: Some(daily_salary).filter(|s| is_usable(*s)),
        }
    }

    /// Returns true when the salary is a positive number within range.
    pub fn is_valid(&self) -> bool {
        self.daily_salary.is_some()
    }

    /// Returns the daily salary, or zero when invalid.
    pub fn daily_salary(&self) -> Decimal {
        self.daily_salary.unwrap_or(Decimal::ZERO)
    }

    /// Returns the hourly rate (daily salary / `hours_per_day`), or zero when invalid.
    pub fn hourly_rate(&self, hours_per_day: Decimal) -> Decimal {
        match self.daily_salary {
            Some(salary) if hours_per_day > Decimal::ZERO => {
                salary.checked_div(hours_per_day).unwrap_or(Decimal::ZERO)
            }
            _ => Decimal::ZERO,
        }
    }
}

fn is_usable(salary: Decimal) -> bool {
    salary > Decimal::ZERO && salary <= MAX_DAILY_SALARY
}

fn to_decimal(number: &str) -> Option<Decimal> {
    if number.contains(['e', 'E']) {
        Decimal::from_scientific(number).ok()
    } else {
        Decimal::from_str(number).ok()
    }
}

/// Returns the longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`,
/// rewritten into a form `Decimal` can parse.
fn leading_number(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        let end = bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
            + start;
        (end, end - start)
    };

    let (mut end, mut digits) = digits_from(usize::from(matches!(
        bytes.first(),
        Some(b'+' | b'-')
    )));

    if bytes.get(end) == Some(&b'.') {
        let (fraction_end, fraction_digits) = digits_from(end + 1);
        // "5." is fine, a lone "." is not
        if fraction_digits > 0 || digits > 0 {
            end = fraction_end;
            digits += fraction_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    let mantissa = s[..end].trim_start_matches('+').trim_end_matches('.');
    let mantissa = match mantissa.strip_prefix('-') {
        Some(rest) if rest.starts_with('.') => format!("-0{rest}"),
        _ if mantissa.starts_with('.') => format!("0{mantissa}"),
        _ => mantissa.to_string(),
    };

    // An exponent only counts when at least one digit follows the marker
    if !matches!(bytes.get(end), Some(b'e' | b'E')) {
        return Some(mantissa);
    }
    let sign = bytes.get(end + 1).copied();
    let exponent_start = end + 1 + usize::from(matches!(sign, Some(b'+' | b'-')));
    let (exponent_end, exponent_digits) = digits_from(exponent_start);
    if exponent_digits == 0 {
        return Some(mantissa);
    }

    let minus = if sign == Some(b'-') { "-" } else { "" };
    Some(format!(
        "{mantissa}e{minus}{}",
        &s[exponent_start..exponent_end]
    ))
}
