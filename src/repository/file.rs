//! File-Backed Store
//!
//! One file per key under a base directory, for desktop hosts that want
//! the list to survive restarts.

use std::io;
use std::path::PathBuf;

use crate::domain::{DomainError, DomainResult};

use super::traits::KeyValueStore;

/// Key-value store persisting each entry as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!(
                "failed to read '{}': {}",
                key, e
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| DomainError::Storage(format!("failed to create store dir: {}", e)))?;
        std::fs::write(self.path_for(key), value)
            .map_err(|e| DomainError::Storage(format!("failed to write '{}': {}", key, e)))
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Storage(format!(
                "failed to remove '{}': {}",
                key, e
            ))),
        }
    }
}
