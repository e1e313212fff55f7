//! Browser localStorage backing for favorites

use chordbook_core::{FallbackStorage, KeyValueStore, StorageError};

/// `window.localStorage`, or memory when the browser refuses access
/// (private mode, disabled storage)
pub type LocalStorage = FallbackStorage<BrowserStorage>;

pub fn local_storage() -> LocalStorage {
    FallbackStorage::new(get_storage().map(BrowserStorage))
}

pub fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[derive(Debug)]
pub struct BrowserStorage(web_sys::Storage);

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{e:?}"),
        })
    }
}
