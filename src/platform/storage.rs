//! Durable key-value string storage
//!
//! LocalStorage on the web, an in-memory map everywhere else.

use std::collections::HashMap;

use thiserror::Error;

/// Why a write did not stick
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No backing store (private browsing, storage disabled)
    #[error("storage unavailable")]
    Unavailable,
    /// The store refused the write (quota, security error)
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// A string-keyed durable store
pub trait KeyValueStore {
    /// Read a value; missing keys and read failures are both `None`
    fn get(&self, key: &str) -> Option<String>;
    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store (native runs and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Browser LocalStorage (scoped to the page origin)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, scores will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_store_through_mut_ref() {
        fn write(mut store: impl KeyValueStore) {
            store.set("best", "12").unwrap();
        }

        let mut store = MemoryStore::new();
        write(&mut store);
        assert_eq!(store.get("best").as_deref(), Some("12"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
        assert!(StorageError::Rejected("quota".into()).to_string().contains("quota"));
    }
}
