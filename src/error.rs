//! Error types for the Overtime Engine.
//!
//! The calculation core is total and never fails. Errors only arise at the
//! edges: loading an overtime policy, parsing user-supplied clock times and
//! dates, and reading or writing the timesheet store.

use thiserror::Error;

/// The main error type for the Overtime Engine.
///
/// # Example
///
/// ```
/// use overtime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/overtime.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/overtime.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The overtime policy parsed but holds an unusable value.
    #[error("Invalid overtime policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A non-empty clock time that is not `HH:MM` on a 24-hour clock.
    #[error("Invalid clock time '{value}': expected HH:MM")]
    InvalidClockTime {
        /// The rejected input.
        value: String,
    },

    /// A date that is not an ISO `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// The timesheet store could not be read or written.
    #[error("Timesheet store error: {message}")]
    StoreError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = EngineError::InvalidPolicy {
            field: "hours_per_day".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid overtime policy field 'hours_per_day': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_clock_time_displays_value() {
        let error = EngineError::InvalidClockTime {
            value: "25:00".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid clock time '25:00': expected HH:MM");
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = EngineError::InvalidDate {
            value: "17/10/2026".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '17/10/2026': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_store_error_displays_message() {
        let error = EngineError::StoreError {
            message: "permission denied".to_string(),
        };
        assert_eq!(error.to_string(), "Timesheet store error: permission denied");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_store_error() -> EngineResult<()> {
            Err(EngineError::StoreError {
                message: "disk full".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_store_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
