//! # Key-value storage capability
//!
//! [`KeyValueStore`] is the seam between UI logic and whatever persistent
//! string storage the platform offers. The registration flow only ever writes
//! one key (the auth token), but reading and removing are part of the trait
//! so other pages can inspect or clear what was stored.
//!
//! Implementations live in sibling modules ([`crate::memory`] for tests and
//! native targets, `crate::local` for the browser's `localStorage`).

use thiserror::Error;

/// Errors raised by a [`KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing storage could not be reached (no window, storage disabled,
    /// poisoned lock).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backing storage refused the operation (quota exceeded, security
    /// error).
    #[error("storage operation on '{key}' failed: {reason}")]
    Operation { key: String, reason: String },
}

impl StoreError {
    pub fn operation(key: &str, reason: impl Into<String>) -> Self {
        Self::Operation {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Async trait for persisting string values under string keys.
pub trait KeyValueStore {
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>>;
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
    fn remove_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}
