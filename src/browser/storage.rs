//! localStorage Binding
//!
//! `KeyValueStore` over `window.localStorage`.

use purrfect_core::{KeyValueStore, StorageError};

/// Looks the storage object up on every call, so the handle itself is
/// `Send + Sync` and can live inside a Leptos signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage()
            .ok_or_else(|| StorageError::new(key, "localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::new(key, format!("{:?}", e)))
    }
}
