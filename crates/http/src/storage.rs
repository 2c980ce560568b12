//! Persistent token storage
//!
//! The session store, the request interceptor and the router guard all read
//! the bearer token through [`TokenStorage`]. The browser build backs it with
//! `localStorage`; native builds and tests use [`MemoryStorage`].

use crate::config::StorageConfig;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Storage error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled)
    #[error("Storage unavailable")]
    Unavailable,

    /// The backend refused the operation
    #[error("Storage access failed: {0}")]
    Access(String),
}

/// Key-value storage holding the persisted bearer token
pub trait TokenStorage {
    /// Read a raw value
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a raw value
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value; deleting a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Read the persisted token, treating an empty string as absent
    fn token(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .get_item(StorageConfig::TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    /// Persist the token
    fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.set_item(StorageConfig::TOKEN_KEY, token)
    }

    /// Remove the persisted token
    fn clear_token(&self) -> Result<(), StorageError> {
        self.remove_item(StorageConfig::TOKEN_KEY)
    }
}

/// In-memory storage for native builds and tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds a token
    pub fn with_token(token: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(StorageConfig::TOKEN_KEY.to_string(), token.into());
        storage
    }
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_under_token_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.token().unwrap(), None);

        storage.set_token("abc").unwrap();
        assert_eq!(storage.token().unwrap().as_deref(), Some("abc"));
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("abc"));

        storage.clear_token().unwrap();
        assert_eq!(storage.get_item("token").unwrap(), None);
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let storage = MemoryStorage::with_token("");
        assert_eq!(storage.token().unwrap(), None);
    }

    #[test]
    fn removing_missing_key_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.clear_token().is_ok());
    }
}
