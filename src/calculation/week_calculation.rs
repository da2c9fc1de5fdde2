//! Full week calculation.
//!
//! Ties the pieces together in one direction: entries → worked hours →
//! overtime tiers → pay → weekly totals. Each stage records audit steps so a
//! reader can see why every figure came out the way it did.

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::OvertimePolicy;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DayResult, DayRow, Entry, RateConfig, WeekCalculation,
    WeekSummary,
};

use super::calendar_week::{is_weekend, week_dates};
use super::overtime_allocator::{OvertimeSplit, allocate_overtime};
use super::pay_calculator::{DayPay, calculate_day_pay};
use super::time_arithmetic::worked_hours;
use super::week_aggregator::summarize_week;

/// Calculates the week containing `reference`.
///
/// Entries outside that week are ignored. When several entries share a
/// date the first one wins. Dates without an entry count as unworked.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::calculate_week;
/// use overtime_engine::config::OvertimePolicy;
/// use overtime_engine::models::{Entry, RateConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entries = vec![
///     Entry::from_strs("2026-10-12", "07:00", "21:30").unwrap(), // Monday, 14.5h
///     Entry::from_strs("2026-10-17", "09:00", "13:00").unwrap(), // Saturday, 4h
/// ];
/// let reference = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
///
/// let week = calculate_week(
///     &entries,
///     &RateConfig::parse("800"),
///     reference,
///     &OvertimePolicy::default(),
/// );
///
/// assert_eq!(week.days.len(), 7);
/// assert_eq!(week.summary.double_hours, Decimal::from(5));
/// // 800 + 1600 base, 5h × 100 × 2 overtime
/// assert_eq!(week.summary.grand_total_pay, Decimal::from(3400));
/// ```
pub fn calculate_week(
    entries: &[Entry],
    rate: &RateConfig,
    reference: NaiveDate,
    policy: &OvertimePolicy,
) -> WeekCalculation {
    let started = Instant::now();
    let calculation_id = Uuid::new_v4();
    let dates = week_dates(reference);
    let week_start = dates[0];
    let week_end = dates[dates.len() - 1];

    info!(
        calculation_id = %calculation_id,
        week_start = %week_start,
        entries = entries.len(),
        "Calculating week"
    );

    let mut audit = AuditBuilder::default();
    let mut warnings = Vec::new();

    let hourly_rate = rate.hourly_rate(policy.hours_per_day);
    audit.push(salary_step(rate, hourly_rate));
    if !rate.is_valid() && !rate.input.trim().is_empty() {
        warn!(
            calculation_id = %calculation_id,
            salary = %rate.input,
            "Daily salary is not a usable positive amount, pay resolves to zero"
        );
        warnings.push(AuditWarning {
            code: "INVALID_SALARY".to_string(),
            message: format!(
                "Daily salary '{}' is not a usable positive amount; all pay is zero",
                rate.input
            ),
            severity: "high".to_string(),
        });
    }

    let recorded: Vec<Option<&Entry>> = dates
        .iter()
        .map(|date| entries.iter().find(|e| e.date == *date))
        .collect();

    let daily_hours: Vec<Decimal> = recorded
        .iter()
        .map(|entry| entry.map_or(Decimal::ZERO, |e| worked_hours(e.clock_in, e.clock_out)))
        .collect();

    let reversed = recorded
        .iter()
        .zip(&daily_hours)
        .filter_map(|(entry, hours)| entry.filter(|e| e.is_complete() && hours.is_zero()));
    warnings.extend(reversed.map(|entry| AuditWarning {
        code: "NON_CHRONOLOGICAL_TIMES".to_string(),
        message: format!(
            "Clock-out on {} is not after clock-in; worked hours are zero",
            entry.date
        ),
        severity: "medium".to_string(),
    }));

    let splits = allocate_overtime(
        &daily_hours,
        policy.daily_threshold_hours,
        policy.weekly_double_cap_hours,
    );

    let mut remaining_before = policy.weekly_double_cap_hours.max(Decimal::ZERO);
    let mut days = Vec::with_capacity(dates.len());

    for ((date, entry), (hours, split)) in dates
        .iter()
        .zip(&recorded)
        .zip(daily_hours.iter().zip(&splits))
    {
        let weekend = is_weekend(*date);

        debug!(
            calculation_id = %calculation_id,
            date = %date,
            worked_hours = %hours.normalize(),
            double_hours = %split.double_hours.normalize(),
            triple_hours = %split.triple_hours.normalize(),
            "Allocated overtime"
        );
        audit.push(allocation_step(*date, *hours, split, remaining_before, policy));
        remaining_before = split.remaining_double_capacity;

        let pay = calculate_day_pay(
            *hours,
            weekend,
            split.double_hours,
            split.triple_hours,
            rate,
            policy,
        );
        audit.push(pay_step(*date, *hours, weekend, split, &pay, rate.is_valid()));

        days.push(DayRow {
            clock_in: entry.and_then(|e| e.clock_in),
            clock_out: entry.and_then(|e| e.clock_out),
            result: DayResult {
                date: *date,
                worked_hours: *hours,
                is_weekend: weekend,
                overtime_hours: split.overtime_hours,
                double_hours: split.double_hours,
                triple_hours: split.triple_hours,
                base_pay: pay.base_pay,
                overtime_pay: pay.overtime_pay,
            },
        });
    }

    let results: Vec<DayResult> = days.iter().map(|row| row.result.clone()).collect();
    let summary = summarize_week(&results);
    audit.push(aggregation_step(&summary));

    info!(
        calculation_id = %calculation_id,
        week_start = %week_start,
        total_hours = %summary.total_hours.normalize(),
        grand_total_pay = %summary.grand_total_pay.normalize(),
        "Week calculated"
    );

    WeekCalculation {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        week_start,
        week_end,
        salary_valid: rate.is_valid(),
        daily_salary: rate.daily_salary(),
        hourly_rate,
        days,
        summary,
        audit_trace: AuditTrace {
            steps: audit.finish(),
            warnings,
            duration_us: started.elapsed().as_micros() as u64,
        },
    }
}

/// Numbers audit steps in the order they are pushed.
#[derive(Default)]
struct AuditBuilder {
    steps: Vec<AuditStep>,
}

impl AuditBuilder {
    fn push(&mut self, mut step: AuditStep) {
        step.step_number = self.steps.len() as u32 + 1;
        self.steps.push(step);
    }

    fn finish(self) -> Vec<AuditStep> {
        self.steps
    }
}

fn salary_step(rate: &RateConfig, hourly_rate: Decimal) -> AuditStep {
    let reasoning = if rate.is_valid() {
        format!(
            "'{}' parsed as daily salary {}; hourly rate {}",
            rate.input,
            rate.daily_salary().normalize(),
            hourly_rate.normalize()
        )
    } else {
        format!(
            "'{}' is not a usable positive amount; all pay figures resolve to zero",
            rate.input
        )
    };

    AuditStep {
        step_number: 0,
        rule_id: "salary_parse".to_string(),
        rule_name: "Daily Salary Parse".to_string(),
        date: None,
        input: serde_json::json!({ "salary_daily": rate.input }),
        output: serde_json::json!({
            "valid": rate.is_valid(),
            "daily_salary": rate.daily_salary().normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string()
        }),
        reasoning,
    }
}

fn allocation_step(
    date: NaiveDate,
    hours: Decimal,
    split: &OvertimeSplit,
    remaining_before: Decimal,
    policy: &OvertimePolicy,
) -> AuditStep {
    let reasoning = if split.overtime_hours.is_zero() {
        format!(
            "{} hours worked does not exceed the {} hour threshold, no overtime",
            hours.normalize(),
            policy.daily_threshold_hours.normalize()
        )
    } else if split.triple_hours.is_zero() {
        format!(
            "{} overtime hours fit in the remaining {} double hours",
            split.overtime_hours.normalize(),
            remaining_before.normalize()
        )
    } else {
        format!(
            "{} overtime hours exceed the remaining {} double hours, {} hours paid triple",
            split.overtime_hours.normalize(),
            remaining_before.normalize(),
            split.triple_hours.normalize()
        )
    };

    AuditStep {
        step_number: 0,
        rule_id: "overtime_allocation".to_string(),
        rule_name: "Weekly Overtime Allocation".to_string(),
        date: Some(date),
        input: serde_json::json!({
            "worked_hours": hours.normalize().to_string(),
            "daily_threshold": policy.daily_threshold_hours.normalize().to_string(),
            "remaining_double_capacity": remaining_before.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_hours": split.overtime_hours.normalize().to_string(),
            "double_hours": split.double_hours.normalize().to_string(),
            "triple_hours": split.triple_hours.normalize().to_string(),
            "remaining_double_capacity": split.remaining_double_capacity.normalize().to_string()
        }),
        reasoning,
    }
}

fn pay_step(
    date: NaiveDate,
    hours: Decimal,
    weekend: bool,
    split: &OvertimeSplit,
    pay: &DayPay,
    salary_valid: bool,
) -> AuditStep {
    let reasoning = if !salary_valid {
        "No valid daily salary, pay is zero".to_string()
    } else if hours.is_zero() {
        "No hours worked, no base pay".to_string()
    } else if weekend {
        format!(
            "Worked weekend day pays a doubled flat base of {}",
            pay.base_pay.normalize()
        )
    } else {
        format!(
            "Worked weekday pays the flat daily salary of {}",
            pay.base_pay.normalize()
        )
    };

    AuditStep {
        step_number: 0,
        rule_id: "day_pay".to_string(),
        rule_name: "Daily Pay".to_string(),
        date: Some(date),
        input: serde_json::json!({
            "worked_hours": hours.normalize().to_string(),
            "is_weekend": weekend,
            "double_hours": split.double_hours.normalize().to_string(),
            "triple_hours": split.triple_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_pay": pay.base_pay.normalize().to_string(),
            "overtime_pay": pay.overtime_pay.normalize().to_string()
        }),
        reasoning,
    }
}

fn aggregation_step(summary: &WeekSummary) -> AuditStep {
    AuditStep {
        step_number: 0,
        rule_id: "week_aggregation".to_string(),
        rule_name: "Weekly Totals".to_string(),
        date: None,
        input: serde_json::json!({ "days": 7 }),
        output: serde_json::json!({
            "total_hours": summary.total_hours.normalize().to_string(),
            "overtime_hours": summary.overtime_hours.normalize().to_string(),
            "double_hours": summary.double_hours.normalize().to_string(),
            "triple_hours": summary.triple_hours.normalize().to_string(),
            "base_pay": summary.base_pay.normalize().to_string(),
            "overtime_pay": summary.overtime_pay.normalize().to_string(),
            "grand_total_pay": summary.grand_total_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} days worked; base {} + overtime {} = {}",
            summary.days_worked,
            summary.base_pay.normalize(),
            summary.overtime_pay.normalize(),
            summary.grand_total_pay.normalize()
        ),
    }
}
