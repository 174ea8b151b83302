//! # `localStorage` store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. Values survive page reloads within the same origin and
//! have no expiry.
//!
//! Like the rest of the store crate this is a zero-size, `Clone`-friendly
//! handle: `window.localStorage` is looked up on every call, since the
//! browser hands back the same `Storage` object each time.
//!
//! Unlike the in-memory store, errors are real here: storage can be disabled
//! (privacy modes, sandboxed iframes) or full, and both surface as
//! [`StoreError`] instead of being swallowed.

use crate::kv::{KeyValueStore, StoreError};

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorageStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::operation(key, format!("{e:?}")))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::operation(key, format!("{e:?}")))
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::operation(key, format!("{e:?}")))
    }
}
