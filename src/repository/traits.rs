//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for local persistence.
//! Implementations can use files, memory, web storage, etc.

use crate::domain::DomainResult;

/// Minimal string key-value storage contract.
///
/// This is the whole surface the list needs: get/set/remove of strings.
/// All operations are synchronous; the store is only ever touched from
/// the single thread driving the table.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> DomainResult<()>;

    /// Remove the entry under `key`. Removing an absent key is not an
    /// error.
    fn remove(&mut self, key: &str) -> DomainResult<()>;
}
