//! Timesheet entry model and related types.
//!
//! An [`Entry`] records the clock-in and clock-out times for a single date.
//! The JSON shape matches what the timesheet has always stored:
//! `{"date":"2026-10-12","clockIn":"08:00","clockOut":""}`, with an empty
//! string standing in for a time that has not been recorded yet.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const CLOCK_FORMAT: &str = "%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a wall-clock time in `HH:MM` form.
///
/// An empty (or all-whitespace) string means "not recorded" and yields `None`.
///
/// # Example
///
/// ```
/// use overtime_engine::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("08:30").unwrap(), NaiveTime::from_hms_opt(8, 30, 0));
/// assert_eq!(parse_clock_time("").unwrap(), None);
/// assert!(parse_clock_time("24:00").is_err());
/// ```
pub fn parse_clock_time(value: &str) -> EngineResult<Option<NaiveTime>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    NaiveTime::parse_from_str(trimmed, CLOCK_FORMAT)
        .map(Some)
        .map_err(|_| EngineError::InvalidClockTime {
            value: value.to_string(),
        })
}

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Example
///
/// ```
/// use overtime_engine::models::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("2026-10-12").unwrap(), NaiveDate::from_ymd_opt(2026, 10, 12).unwrap());
/// assert!(parse_date("12/10/2026").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Serde adapter for optional `HH:MM` clock times stored as possibly-empty strings.
pub(super) mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{CLOCK_FORMAT, parse_clock_time};

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(CLOCK_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(value) => parse_clock_time(&value).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// One recorded workday.
///
/// At most one entry exists per date. Either time may be missing while the
/// day is still in progress.
///
/// # Example
///
/// ```
/// use overtime_engine::models::Entry;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let entry = Entry {
///     date: NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
///     clock_in: NaiveTime::from_hms_opt(8, 0, 0),
///     clock_out: None,
/// };
/// assert!(!entry.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// The calendar date of the workday.
    pub date: NaiveDate,
    /// Clock-in wall-clock time, if recorded.
    #[serde(with = "clock_time", default)]
    pub clock_in: Option<NaiveTime>,
    /// Clock-out wall-clock time, if recorded.
    #[serde(with = "clock_time", default)]
    pub clock_out: Option<NaiveTime>,
}

impl Entry {
    /// Builds an entry from the raw strings a form would submit.
    ///
    /// Empty times are treated as not recorded.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_engine::models::Entry;
    ///
    /// let entry = Entry::from_strs("2026-10-12", "08:00", "").unwrap();
    /// assert!(entry.clock_in.is_some());
    /// assert!(entry.clock_out.is_none());
    /// ```
    pub fn from_strs(date: &str, clock_in: &str, clock_out: &str) -> EngineResult<Self> {
        Ok(Self {
            date: parse_date(date)?,
            clock_in: parse_clock_time(clock_in)?,
            clock_out: parse_clock_time(clock_out)?,
        })
    }

    /// Returns true when both clock-in and clock-out are recorded.
    pub fn is_complete(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_some()
    }
}

/// Everything the timesheet persists between sessions.
///
/// The salary is kept exactly as typed; it is only parsed when a week is
/// calculated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetData {
    /// The daily salary text as entered by the user.
    #[serde(default)]
    pub salary_daily: String,
    /// Recorded entries, at most one per date.
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl TimesheetData {
    /// Returns the entry recorded for `date`, if any.
    pub fn entry_for(&self, date: NaiveDate) -> Option<&Entry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Stores `entry`, replacing any entry for the same date.
    ///
    /// The new entry is appended, so the most recently touched date is last.
    pub fn upsert(&mut self, entry: Entry) {
        self.entries.retain(|e| e.date != entry.date);
        self.entries.push(entry);
    }
}
