//! Favorites store: song id -> category label, mirrored to durable storage
//!
//! The in-memory map is the source of truth. Every mutation rewrites the
//! whole serialized map under a single key, so storage never holds a partial
//! update. Loading never fails; anything unreadable becomes "no favorites".

use crate::storage::{KeyValueStore, StorageError};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, error, info, warn};

/// Result of a toggle
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Toggled {
    /// Song was not a favorite and now is
    Added { category: String },
    /// Song was a favorite in the given category and no longer is
    Removed,
    /// Song stays a favorite but moved category
    Recategorized { from: String, to: String },
}

pub struct FavoritesStore<S: KeyValueStore> {
    storage: S,
    key: String,
    entries: BTreeMap<String, String>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load the mapping stored under `key`, degrading to empty on any failure.
    ///
    /// `default_category` is used for the boolean format older builds wrote
    /// (`{"3": true}`).
    pub fn load(storage: S, key: impl Into<String>, default_category: &str) -> Self {
        let key = key.into();
        let entries = match storage.get_item(&key) {
            Ok(Some(raw)) => parse_entries(&raw, default_category),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                warn!("Failed to read favorites, starting empty: {e}");
                BTreeMap::new()
            }
        };

        info!("Loaded {} favorites", entries.len());

        Self {
            storage,
            key,
            entries,
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn category_of(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Insert or overwrite a favorite. A blank category abandons the call and
    /// returns `false`; otherwise returns `true`.
    pub fn set_favorite(&mut self, id: &str, category: &str) -> bool {
        if category.trim().is_empty() {
            debug!("Ignoring favorite for {id} with empty category");
            return false;
        }

        if self.category_of(id) == Some(category) {
            return true;
        }

        self.entries.insert(id.to_string(), category.to_string());
        self.persist_or_log();
        true
    }

    pub fn unset_favorite(&mut self, id: &str) {
        if self.entries.remove(id).is_some() {
            self.persist_or_log();
        }
    }

    /// Toggle `id` against `category`.
    ///
    /// Same category removes the favorite, a different category moves it, and
    /// an unfavorited song is added. Returns `None` when the category is blank
    /// and the song is not already a favorite in it.
    pub fn toggle(&mut self, id: &str, category: &str) -> Option<Toggled> {
        match self.category_of(id).map(str::to_string) {
            Some(current) if current == category => {
                self.unset_favorite(id);
                Some(Toggled::Removed)
            }
            Some(current) => self
                .set_favorite(id, category)
                .then(|| Toggled::Recategorized {
                    from: current,
                    to: category.to_string(),
                }),
            None => self.set_favorite(id, category).then(|| Toggled::Added {
                category: category.to_string(),
            }),
        }
    }

    /// Distinct non-blank category labels in use.
    pub fn categories(&self) -> BTreeSet<String> {
        self.entries
            .values()
            .filter(|c| !c.trim().is_empty())
            .cloned()
            .collect()
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries)?;
        self.storage.set_item(&self.key, &json)
    }

    fn persist_or_log(&mut self) {
        if let Err(e) = self.persist() {
            error!("Failed to save favorites: {e}");
        }
    }
}

/// Parse stored favorites. Non-object content is malformed and yields an
/// empty map; individual entries of an unexpected type are skipped.
fn parse_entries(raw: &str, default_category: &str) -> BTreeMap<String, String> {
    let object = match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Object(object)) => object,
        Ok(_) => {
            warn!("Stored favorites are not an object, starting empty");
            return BTreeMap::new();
        }
        Err(e) => {
            warn!("Stored favorites are not valid JSON, starting empty: {e}");
            return BTreeMap::new();
        }
    };

    let mut entries = BTreeMap::new();
    for (id, value) in object {
        match value {
            serde_json::Value::String(category) => {
                entries.insert(id, category);
            }
            serde_json::Value::Bool(true) => {
                entries.insert(id, default_category.to_string());
            }
            serde_json::Value::Bool(false) => {}
            other => warn!("Skipping favorite {id} with unexpected value {other}"),
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "songFavorites";

    fn store_with(raw: &str) -> FavoritesStore<MemoryStorage> {
        FavoritesStore::load(MemoryStorage::with_item(KEY, raw), KEY, "favorites")
    }

    fn empty_store() -> FavoritesStore<MemoryStorage> {
        FavoritesStore::load(MemoryStorage::new(), KEY, "favorites")
    }

    struct BrokenStorage;

    impl KeyValueStore for BrokenStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                message: "SecurityError".to_string(),
            })
        }

        fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            })
        }
    }

    #[test]
    fn loads_string_mapping() {
        let store = store_with(r#"{"3":"favorites","7":"gig"}"#);
        assert!(store.is_favorite("3"));
        assert_eq!(store.category_of("7"), Some("gig"));
        assert!(!store.is_favorite("4"));
    }

    #[test]
    fn malformed_content_loads_empty() {
        assert!(store_with("not json at all").is_empty());
        assert!(store_with(r#"["3","7"]"#).is_empty());
        assert!(store_with("42").is_empty());
    }

    #[test]
    fn read_failure_loads_empty() {
        let store = FavoritesStore::load(BrokenStorage, KEY, "favorites");
        assert!(store.is_empty());
    }

    #[test]
    fn legacy_boolean_entries() {
        let store = store_with(r#"{"1":true,"2":false,"3":"gig","4":5}"#);
        assert_eq!(store.category_of("1"), Some("favorites"));
        assert!(!store.is_favorite("2"));
        assert_eq!(store.category_of("3"), Some("gig"));
        assert!(!store.is_favorite("4"));
    }

    #[test]
    fn set_writes_through() {
        let mut store = empty_store();
        assert!(store.set_favorite("5", "practice"));
        assert_eq!(store.storage().get(KEY), Some(r#"{"5":"practice"}"#));
    }

    #[test]
    fn set_with_blank_category_is_abandoned() {
        let mut store = empty_store();
        assert!(!store.set_favorite("5", ""));
        assert!(!store.set_favorite("5", "   "));
        assert!(!store.is_favorite("5"));
        assert_eq!(store.storage().get(KEY), None);
    }

    #[test]
    fn set_overwrites_category() {
        let mut store = store_with(r#"{"5":"favorites"}"#);
        store.set_favorite("5", "gig");
        assert_eq!(store.category_of("5"), Some("gig"));
        assert_eq!(store.storage().get(KEY), Some(r#"{"5":"gig"}"#));
    }

    #[test]
    fn unset_removes_and_writes() {
        let mut store = store_with(r#"{"5":"favorites","6":"gig"}"#);
        store.unset_favorite("5");
        assert!(!store.is_favorite("5"));
        assert_eq!(store.storage().get(KEY), Some(r#"{"6":"gig"}"#));
    }

    #[test]
    fn unset_missing_is_noop() {
        let mut store = store_with(r#"{"6":"gig"}"#);
        store.unset_favorite("5");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_same_category_is_involution() {
        let mut store = store_with(r#"{"1":"gig"}"#);
        let before = store.entries().clone();

        assert_eq!(
            store.toggle("2", "favorites"),
            Some(Toggled::Added {
                category: "favorites".to_string()
            })
        );
        assert_eq!(store.toggle("2", "favorites"), Some(Toggled::Removed));
        assert_eq!(store.entries(), &before);
    }

    #[test]
    fn toggle_cross_category_overwrites() {
        let mut store = empty_store();
        store.toggle("2", "favorites");
        assert_eq!(
            store.toggle("2", "gig"),
            Some(Toggled::Recategorized {
                from: "favorites".to_string(),
                to: "gig".to_string()
            })
        );
        assert_eq!(store.category_of("2"), Some("gig"));
    }

    #[test]
    fn toggle_blank_category_on_new_song_does_nothing() {
        let mut store = empty_store();
        assert_eq!(store.toggle("2", ""), None);
        assert!(store.is_empty());
    }

    #[test]
    fn categories_skip_blank_labels() {
        let store = store_with(r#"{"1":"gig","2":"","3":"  ","4":"favorites","5":"gig"}"#);
        let categories: Vec<String> = store.categories().into_iter().collect();
        assert_eq!(categories, vec!["favorites".to_string(), "gig".to_string()]);
    }

    #[test]
    fn write_failure_keeps_memory() {
        let mut store = FavoritesStore::load(BrokenStorage, KEY, "favorites");
        assert!(store.set_favorite("1", "gig"));
        assert_eq!(store.category_of("1"), Some("gig"));
    }
}
