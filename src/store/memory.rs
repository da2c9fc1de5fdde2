//! In-memory timesheet store.

use crate::error::EngineResult;
use crate::models::TimesheetData;

use super::traits::EntryStore;

/// Keeps timesheet data in memory for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: TimesheetData,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `data`.
    pub fn with_data(data: TimesheetData) -> Self {
        Self { data }
    }
}

impl EntryStore for InMemoryStore {
    fn load(&self) -> EngineResult<TimesheetData> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &TimesheetData) -> EngineResult<()> {
        self.data = data.clone();
        Ok(())
    }

    fn clear(&mut self) -> EngineResult<()> {
        self.data = TimesheetData::default();
        Ok(())
    }
}
