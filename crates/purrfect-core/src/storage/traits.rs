//! Storage Layer - Core Trait
//!
//! Abstract key-value persistence.
//! Implementations: browser localStorage, in-memory (tests).

use crate::error::StorageError;

/// String-keyed persistent storage
///
/// Synchronous from the caller's point of view and best-effort:
/// callers log failed writes and carry on.
pub trait KeyValueStore {
    /// Read a raw value, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a raw value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
