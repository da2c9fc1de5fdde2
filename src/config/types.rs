//! Configuration types for overtime calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the overtime policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// Currency code used when displaying pay (e.g., "MXN").
    pub currency: String,
}

/// Thresholds and multipliers for the weekly overtime calculation.
///
/// # Example
///
/// ```
/// use overtime_engine::config::OvertimePolicy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = OvertimePolicy::default();
/// assert_eq!(policy.daily_threshold_hours, Decimal::from_str("9.5").unwrap());
/// assert_eq!(policy.weekly_double_cap_hours, Decimal::from(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePolicy {
    /// Hours per day after which overtime accrues.
    pub daily_threshold_hours: Decimal,
    /// Maximum double-rate overtime hours per week, consumed Monday first.
    pub weekly_double_cap_hours: Decimal,
    /// Divisor turning the daily salary into an hourly rate.
    pub hours_per_day: Decimal,
    /// Hourly-rate multiplier for double overtime.
    pub double_multiplier: Decimal,
    /// Hourly-rate multiplier for triple overtime.
    pub triple_multiplier: Decimal,
    /// Daily-salary multiplier for a worked weekend day.
    pub weekend_base_multiplier: Decimal,
}

impl Default for OvertimePolicy {
    fn default() -> Self {
        Self {
            daily_threshold_hours: Decimal::new(95, 1),
            weekly_double_cap_hours: Decimal::from(9),
            hours_per_day: Decimal::from(8),
            double_multiplier: Decimal::from(2),
            triple_multiplier: Decimal::from(3),
            weekend_base_multiplier: Decimal::from(2),
        }
    }
}

/// The complete overtime configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Policy metadata.
    metadata: PolicyMetadata,
    /// Thresholds and multipliers.
    overtime: OvertimePolicy,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, overtime: OvertimePolicy) -> Self {
        Self { metadata, overtime }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the overtime thresholds and multipliers.
    pub fn overtime(&self) -> &OvertimePolicy {
        &self.overtime
    }
}
