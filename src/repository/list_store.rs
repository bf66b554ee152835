//! Persisted List Adapter
//!
//! Serializes the ordered record list as JSON under a fixed storage key.
//! The persisted list is the single source of truth reloaded at startup.
//! Storage trouble is never fatal: saves degrade to a logged warning,
//! loads degrade to an empty list.

use log::warn;

use crate::domain::ItemRecord;

use super::traits::KeyValueStore;

/// Adapter from the record list to a [`KeyValueStore`].
pub struct ListStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ListStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Best-effort save of the full ordered list. A storage failure is
    /// logged and swallowed; the in-memory table stays authoritative.
    pub fn save(&mut self, records: &[ItemRecord]) {
        let payload = match serde_json::to_string(records) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("could not serialize record list: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &payload) {
            warn!("storage unavailable, list not saved: {}", e);
        }
    }

    /// Loads the persisted list. Absent key, corrupt payload or
    /// unavailable storage all read as an empty list; this never raises.
    pub fn load(&self) -> Vec<ItemRecord> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("could not read persisted list: {}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("could not parse persisted list, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Removes the persisted entry entirely (the clear-all action).
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove(&self.key) {
            warn!("could not remove persisted list: {}", e);
        }
    }
}
