//! Core data models for the Overtime Engine.
//!
//! Entries are the only persisted state; every other model here is derived
//! from entries, a daily salary and a reference date.

mod calculation_result;
mod day_result;
mod entry;
mod rate;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, WeekCalculation};
pub use day_result::{DayResult, DayRow, WeekSummary};
pub use entry::{Entry, TimesheetData, parse_clock_time, parse_date};
pub use rate::{MAX_DAILY_SALARY, RateConfig};
