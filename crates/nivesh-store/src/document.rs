//! Keyed JSON document storage.
//!
//! One document per key, stored as `<data_dir>/<key>.json`. Writes replace
//! the whole document; reads treat missing or unparseable content as absent
//! so stored corruption can never take down the conversation.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use nivesh_core::error::{NiveshError, Result};

/// Document store rooted at a single data directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory documents are stored under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read and deserialize the document stored under `key`.
    ///
    /// Returns `None` if the document does not exist, cannot be read, or
    /// does not parse. Unparseable content is logged and otherwise ignored.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(key, error = %e, "Failed to read document");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Stored document is corrupt, treating as absent");
                None
            }
        }
    }

    /// Serialize `value` and overwrite the document stored under `key`.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(value)?;
        let path = self.path_for(key);
        std::fs::write(&path, content)
            .map_err(|e| NiveshError::Storage(format!("Failed to write {}: {}", key, e)))?;
        debug!(key, "Document written");
        Ok(())
    }

    /// Delete the document stored under `key`. Deleting a document that
    /// does not exist is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(NiveshError::Storage(format!(
                "Failed to remove {}: {}",
                key, e
            ))),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}
