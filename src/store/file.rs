//! JSON file timesheet store.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::TimesheetData;

use super::traits::EntryStore;

/// Default file name inside a data directory.
pub const DEFAULT_FILE_NAME: &str = "timesheet.json";

/// Persists timesheet data as pretty-printed JSON in a single file.
///
/// A missing file loads as empty data; the file and its parent directory
/// are created on the first save.
///
/// # Example
///
/// ```no_run
/// use overtime_engine::store::{EntryStore, JsonFileStore};
///
/// let store = JsonFileStore::in_dir("./data");
/// let data = store.load()?;
/// println!("{} entries", data.entries.len());
/// # Ok::<(), overtime_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Stores data at exactly `file_path`.
    pub fn new<P: Into<PathBuf>>(file_path: P) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Stores data in [`DEFAULT_FILE_NAME`] inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn store_error(&self, action: &str, err: impl std::fmt::Display) -> EngineError {
        EngineError::StoreError {
            message: format!("{} '{}': {}", action, self.file_path.display(), err),
        }
    }
}

impl EntryStore for JsonFileStore {
    fn load(&self) -> EngineResult<TimesheetData> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(TimesheetData::default()),
            Err(err) => return Err(self.store_error("Failed to open", err)),
        };

        serde_json::from_reader(BufReader::new(file)).map_err(|err| {
            warn!(path = %self.file_path.display(), error = %err, "Corrupt timesheet file");
            self.store_error("Failed to parse", err)
        })
    }

    fn save(&mut self, data: &TimesheetData) -> EngineResult<()> {
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.store_error("Failed to create", err))?;
        }

        let file =
            File::create(&self.file_path).map_err(|err| self.store_error("Failed to create", err))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|err| self.store_error("Failed to write", err))?;
        writer
            .flush()
            .map_err(|err| self.store_error("Failed to write", err))
    }

    fn clear(&mut self) -> EngineResult<()> {
        match fs::remove_file(&self.file_path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.store_error("Failed to remove", err)),
        }
    }
}
