//! Daily pay calculation.
//!
//! ## Pay Structure
//!
//! **Base pay is flat, not hourly:**
//! - Any positive hours on a weekday pay one full daily salary
//! - Any positive hours on a Saturday or Sunday pay two daily salaries
//!
//! **Overtime is hourly, at the daily salary / 8 rate:**
//! - Double hours at 2× the hourly rate
//! - Triple hours at 3× the hourly rate
//!
//! An invalid salary resolves every figure to zero, as does a day whose pay
//! would not fit in a `Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::OvertimePolicy;
use crate::models::RateConfig;

/// Base and overtime pay for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPay {
    /// Flat pay for having worked the day.
    pub base_pay: Decimal,
    /// Pay for double and triple overtime hours.
    pub overtime_pay: Decimal,
}

/// Calculates base and overtime pay for one day.
///
/// # Arguments
///
/// * `worked_hours` - Hours worked on the day
/// * `is_weekend` - Whether the day is a Saturday or Sunday
/// * `double_hours` - Overtime hours at the double rate
/// * `triple_hours` - Overtime hours at the triple rate
/// * `rate` - The daily salary
/// * `policy` - Multipliers and the hours-per-day divisor
///
/// # Examples
///
/// ## Worked weekend day
///
/// ```
/// use overtime_engine::calculation::calculate_day_pay;
/// use overtime_engine::config::OvertimePolicy;
/// use overtime_engine::models::RateConfig;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_day_pay(
///     Decimal::from(4),
///     true,
///     Decimal::ZERO,
///     Decimal::ZERO,
///     &RateConfig::parse("800"),
///     &OvertimePolicy::default(),
/// );
/// assert_eq!(pay.base_pay, Decimal::from(1600));
/// assert_eq!(pay.overtime_pay, Decimal::ZERO);
/// ```
///
/// ## Weekday with both overtime tiers
///
/// ```
/// use overtime_engine::calculation::calculate_day_pay;
/// use overtime_engine::config::OvertimePolicy;
/// use overtime_engine::models::RateConfig;
/// use rust_decimal::Decimal;
///
/// // Hourly rate 100: 1h × 200 + 2h × 300
/// let pay = calculate_day_pay(
///     Decimal::from(12),
///     false,
///     Decimal::from(1),
///     Decimal::from(2),
///     &RateConfig::parse("800"),
///     &OvertimePolicy::default(),
/// );
/// assert_eq!(pay.base_pay, Decimal::from(800));
/// assert_eq!(pay.overtime_pay, Decimal::from(800));
/// ```
pub fn calculate_day_pay(
    worked_hours: Decimal,
    is_weekend: bool,
    double_hours: Decimal,
    triple_hours: Decimal,
    rate: &RateConfig,
    policy: &OvertimePolicy,
) -> DayPay {
    if !rate.is_valid() {
        return DayPay::default();
    }

    match checked_day_pay(
        worked_hours,
        is_weekend,
        double_hours,
        triple_hours,
        rate,
        policy,
    ) {
        Some(pay) => pay,
        None => {
            warn!(
                daily_salary = %rate.daily_salary(),
                worked_hours = %worked_hours,
                "Day pay overflows the decimal range, pay resolves to zero"
            );
            DayPay::default()
        }
    }
}

fn checked_day_pay(
    worked_hours: Decimal,
    is_weekend: bool,
    double_hours: Decimal,
    triple_hours: Decimal,
    rate: &RateConfig,
    policy: &OvertimePolicy,
) -> Option<DayPay> {
    let daily_salary = rate.daily_salary();
    let base_pay = if worked_hours <= Decimal::ZERO {
        Decimal::ZERO
    } else if is_weekend {
        daily_salary.checked_mul(policy.weekend_base_multiplier)?
    } else {
        daily_salary
    };

    let hourly_rate = rate.hourly_rate(policy.hours_per_day);
    let double_pay = double_hours
        .checked_mul(hourly_rate)?
        .checked_mul(policy.double_multiplier)?;
    let triple_pay = triple_hours
        .checked_mul(hourly_rate)?
        .checked_mul(policy.triple_multiplier)?;

    Some(DayPay {
        base_pay,
        overtime_pay: double_pay.checked_add(triple_pay)?,
    })
}
