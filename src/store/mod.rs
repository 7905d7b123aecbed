//! JSON key-value storage for the journal
//!
//! Each logical key maps to one pretty-printed JSON file under
//! `<data-dir>/store/`:
//! - `users.json`   - full account list
//! - `session.json` - current account (secret stripped), absent when logged out
//! - `trades.json`  - full trade list, all accounts interleaved

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::data_paths::DataPaths;

/// Key for the full account list
pub const USERS_KEY: &str = "users";

/// Key for the current session account
pub const SESSION_KEY: &str = "session";

/// Key for the full trade list
pub const TRADES_KEY: &str = "trades";

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data for key '{key}': {source}")]
    Malformed {
        key: String,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// File-backed JSON key-value store
#[derive(Clone, Debug)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open the store under the data directory, creating it if needed
    pub fn open(data_paths: &DataPaths) -> Result<Self, StoreError> {
        let dir = data_paths.store();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open a store rooted at an explicit directory
    pub fn open_at(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the value stored under `key`, or `None` if the key was never
    /// written. A present-but-malformed file is an error, not a default.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Read the value stored under `key`, falling back to the type's default
    pub fn read_or_default<T: DeserializeOwned + Default>(
        &self,
        key: &str,
    ) -> Result<T, StoreError> {
        Ok(self.read(key)?.unwrap_or_default())
    }

    /// Write `value` under `key`
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value)?;

        // Write to temporary file first, then rename (atomic operation)
        let path = self.path_for(key);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        debug!("Wrote store key '{}' to {:?}", key, path);
        Ok(())
    }

    /// Remove the value stored under `key`; absent keys are fine
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Raw file contents for a key, if present. Used by tests to assert on
    /// the serialized form.
    #[cfg(test)]
    pub fn raw(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }
}
