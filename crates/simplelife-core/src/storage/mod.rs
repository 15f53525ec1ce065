//! Whole-document JSON persistence.
//!
//! Each named document lives in its own `<key>.json` file under the
//! application data directory. Documents are read and written whole;
//! there is no partial update path.

mod store;

pub use store::JsonStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/simplelife[-dev]/` based on SIMPLELIFE_ENV.
///
/// Set SIMPLELIFE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SIMPLELIFE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("simplelife-dev")
    } else {
        base_dir.join("simplelife")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
