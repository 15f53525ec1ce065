//! Key-value document store over JSON files.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::data_dir;
use crate::error::StorageError;

/// Persistence adapter storing one JSON document per key.
///
/// A document named `goals` lives at `<dir>/goals.json`. Absent and
/// unparseable documents are indistinguishable to callers; both fall back
/// to the caller-supplied default.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open the store rooted at the application data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open the store rooted at an arbitrary directory (tests use a tempdir).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load the document stored under `key`, or fall back to `default`.
    ///
    /// Missing files, unreadable files, and documents that fail to
    /// deserialize all degrade to the default rather than erroring.
    pub fn load_or<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("document '{key}' failed to parse, falling back to default: {e}");
                default()
            }),
            Err(_) => default(),
        }
    }

    /// Replace the document stored under `key`.
    ///
    /// Writes to a sibling temp file and renames over the target, so a
    /// crash mid-write leaves the prior document intact.
    ///
    /// # Errors
    /// Returns an error if serialization or the filesystem write fails.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(value)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, self.path(key))?;
        Ok(())
    }
}
