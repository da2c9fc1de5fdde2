//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading overtime
//! policies from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{OvertimePolicy, PolicyConfig, PolicyMetadata};

/// Loads and provides access to an overtime policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml     # Policy metadata
/// └── overtime.yaml   # Threshold, weekly cap and multipliers
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Policy: {}", loader.metadata().name);
/// println!("Daily threshold: {}h", loader.policy().daily_threshold_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing, holds invalid YAML, or the
    /// overtime values are unusable (see [`ConfigLoader::validate`]).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use overtime_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), overtime_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("policy.yaml"))?;
        let overtime = Self::load_yaml::<OvertimePolicy>(&path.join("overtime.yaml"))?;
        Self::validate(&overtime)?;

        tracing::debug!(
            policy = %metadata.name,
            version = %metadata.version,
            "Loaded overtime policy"
        );

        Ok(Self {
            config: PolicyConfig::new(metadata, overtime),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks that an overtime policy can drive a calculation.
    ///
    /// The threshold and weekly cap may be zero but not negative; the
    /// hours-per-day divisor and every multiplier must be positive.
    pub fn validate(policy: &OvertimePolicy) -> EngineResult<()> {
        let non_negative = [
            ("daily_threshold_hours", policy.daily_threshold_hours),
            ("weekly_double_cap_hours", policy.weekly_double_cap_hours),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        let positive = [
            ("hours_per_day", policy.hours_per_day),
            ("double_multiplier", policy.double_multiplier),
            ("triple_multiplier", policy.triple_multiplier),
            ("weekend_base_multiplier", policy.weekend_base_multiplier),
        ];
        for (field, value) in positive {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: format!("must be greater than zero, got {}", value),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.config.metadata()
    }

    /// Returns the overtime thresholds and multipliers.
    pub fn policy(&self) -> &OvertimePolicy {
        self.config.overtime()
    }
}
