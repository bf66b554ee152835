//! In-Memory Store
//!
//! Shared map behind a mutex, so cloned handles see the same entries —
//! the way separate loads of the same page share one web storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{DomainError, DomainResult};

use super::traits::KeyValueStore;

/// In-memory key-value store. Clones share the underlying entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> DomainResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| DomainError::Storage("store mutex poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.guard()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        self.guard()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        self.guard()?.remove(key);
        Ok(())
    }
}
