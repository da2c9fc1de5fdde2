//! Calculation logic for the Overtime Engine.
//!
//! This module contains the pure calculation functions: worked hours from
//! clock times, Monday-start calendar weeks, the weekly double/triple
//! overtime allocation, daily pay, weekly totals, and the full week
//! calculation that chains them together.

mod calendar_week;
mod overtime_allocator;
mod pay_calculator;
mod time_arithmetic;
mod week_aggregator;
mod week_calculation;

pub use calendar_week::{DAYS_IN_WEEK, is_weekend, week_dates, week_start};
pub use overtime_allocator::{OvertimeSplit, allocate_overtime, daily_overtime};
pub use pay_calculator::{DayPay, calculate_day_pay};
pub use time_arithmetic::{minute_of_day, worked_hours, worked_minutes};
pub use week_aggregator::{summarize_week, tiers_balance};
pub use week_calculation::calculate_week;
