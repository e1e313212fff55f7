//! chordbook-core - Song catalog, favorites and view state for the chord book
//!
//! Pure logic with no browser access. The web app plugs in durable storage
//! through [`KeyValueStore`] and feeds the current address in as a [`Location`].

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod filter;
pub mod location;
pub mod songbook;
pub mod storage;

pub use catalog::{Catalog, CatalogError, Song};
pub use config::Config;
pub use favorites::{FavoritesStore, Toggled};
pub use filter::{filter_songs, CategoryFilter, FilterCriteria};
pub use location::{home_location, image_url, song_location, Location};
pub use songbook::{PendingFavorite, Songbook, ToggleRequest, ViewState};
pub use storage::{FallbackStorage, KeyValueStore, MemoryStorage, StorageError};
