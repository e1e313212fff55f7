//! Durable key-value storage seam
//!
//! The browser implementation lives in the web crate. [`MemoryStorage`] backs
//! tests, and [`FallbackStorage`] swaps it in when the browser exposes no
//! `localStorage`.

use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read key {key}: {message}")]
    Read { key: String, message: String },
    #[error("failed to write key {key}: {message}")]
    Write { key: String, message: String },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Minimal string key-value store, modelled on the Web Storage API
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single item.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_string(), value.to_string());
        Self { items }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A durable store when one exists, otherwise memory for the page's lifetime
#[derive(Debug)]
pub enum FallbackStorage<S> {
    Durable(S),
    Memory(MemoryStorage),
}

impl<S> FallbackStorage<S> {
    pub fn new(durable: Option<S>) -> Self {
        match durable {
            Some(store) => FallbackStorage::Durable(store),
            None => {
                tracing::warn!("Durable storage unavailable, favorites will not persist");
                FallbackStorage::Memory(MemoryStorage::new())
            }
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, FallbackStorage::Durable(_))
    }
}

impl<S: KeyValueStore> KeyValueStore for FallbackStorage<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            FallbackStorage::Durable(store) => store.get_item(key),
            FallbackStorage::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            FallbackStorage::Durable(store) => store.set_item(key, value),
            FallbackStorage::Memory(store) => store.set_item(key, value),
        }
    }
}
