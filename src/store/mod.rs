//! Timesheet persistence.
//!
//! Entries and the salary text are the only state that outlives a
//! calculation. They sit behind the [`EntryStore`] trait so the host can
//! choose where they live.

mod file;
mod memory;
mod traits;

pub use file::{DEFAULT_FILE_NAME, JsonFileStore};
pub use memory::InMemoryStore;
pub use traits::EntryStore;
