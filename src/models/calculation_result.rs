//! Week calculation result models.
//!
//! This module contains the [`WeekCalculation`] type and the audit structures
//! that explain how each figure in it was reached.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DayRow, WeekSummary};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The date the step applies to, if it is a per-day step.
    pub date: Option<NaiveDate>,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag input that was accepted but resolved to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use overtime_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of calculating one week.
///
/// Holds the seven day rows (Monday first), the weekly summary and an audit
/// trace. Two calculations of the same inputs differ only in
/// `calculation_id`, `timestamp` and `audit_trace.duration_us`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCalculation {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Monday of the calculated week.
    pub week_start: NaiveDate,
    /// Sunday of the calculated week.
    pub week_end: NaiveDate,
    /// Whether the salary text parsed to a positive number.
    pub salary_valid: bool,
    /// The daily salary used (zero when invalid).
    pub daily_salary: Decimal,
    /// The hourly rate used for overtime (zero when invalid).
    pub hourly_rate: Decimal,
    /// One row per day, Monday through Sunday.
    pub days: Vec<DayRow>,
    /// Weekly totals.
    pub summary: WeekSummary,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
