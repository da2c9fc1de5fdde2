//! The persistence seam for timesheet data.

use crate::error::EngineResult;
use crate::models::TimesheetData;

/// Loads, saves and clears everything the timesheet persists.
///
/// The calculation core never talks to a store; [`crate::timesheet::Timesheet`]
/// loads data, hands it to the calculation by value and saves the result of
/// each user action.
pub trait EntryStore {
    /// Loads the stored data. An empty store yields [`TimesheetData::default`].
    fn load(&self) -> EngineResult<TimesheetData>;

    /// Replaces the stored data.
    fn save(&mut self, data: &TimesheetData) -> EngineResult<()>;

    /// Removes all stored data.
    fn clear(&mut self) -> EngineResult<()>;
}
