use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::kv::{KeyValueStore, StoreError};

/// In-memory KeyValueStore for testing and native fallback.
///
/// Clones share the same map, so a clone handed to a service and a clone kept
/// by a test observe the same writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn items(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.items
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items()?.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get_item() {
        let store = MemoryStore::new();

        // Initially empty
        assert!(store.is_empty());
        assert_eq!(store.get_item("token").await.unwrap(), None);

        store.set_item("token", "abc123").await.unwrap();

        assert_eq!(
            store.get_item("token").await.unwrap(),
            Some("abc123".to_string())
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = MemoryStore::new();

        store.set_item("token", "first").await.unwrap();
        store.set_item("token", "second").await.unwrap();

        assert_eq!(
            store.get_item("token").await.unwrap(),
            Some("second".to_string())
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_item() {
        let store = MemoryStore::new();

        store.set_item("token", "abc123").await.unwrap();
        store.remove_item("token").await.unwrap();
        assert_eq!(store.get_item("token").await.unwrap(), None);

        // Removing a missing key is not an error
        store.remove_item("missing").await.unwrap();
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let observer = store.clone();

        store.set_item("token", "shared").await.unwrap();

        assert_eq!(
            observer.get_item("token").await.unwrap(),
            Some("shared".to_string())
        );
    }
}
