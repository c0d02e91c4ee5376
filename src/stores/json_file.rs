//! The JSON document store backing the application.

use std::fs;
use std::path::PathBuf;

use crate::Error;
use crate::models::AppData;
use crate::stores::AppDataStore;

/// Persists the whole [AppData] document as pretty-printed JSON at a fixed
/// path.
///
/// Every save replaces the file wholesale. There is no locking, so two
/// processes pointed at the same file are last-write-wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`. The file is not touched
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AppDataStore for JsonFileStore {
    fn load(&self) -> Result<AppData, Error> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(AppData::default());
        }

        let text = fs::read_to_string(&self.path).map_err(|error| Error::Io(error.to_string()))?;

        serde_json::from_str(&text).map_err(|error| Error::InvalidJson(error.to_string()))
    }

    fn save(&self, data: &AppData) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(data)
            .map_err(|error| Error::InvalidJson(error.to_string()))?;

        fs::write(&self.path, text).map_err(|error| Error::Io(error.to_string()))
    }
}
