//! View-state controller
//!
//! `Songbook` is the single owner of everything that changes while the page
//! is open: search text, the favorites-only toggle, the active category,
//! the selected song and any favorite awaiting a category. The UI reads from
//! it and calls its operations in response to input; nothing else mutates it.
//!
//! Marking a new favorite needs a category from the user. Instead of blocking
//! on a prompt, [`Songbook::request_toggle`] returns
//! [`ToggleRequest::NeedsCategory`] and keeps a [`PendingFavorite`] until the
//! UI calls [`Songbook::resolve_pending`] or [`Songbook::cancel_pending`].

use crate::catalog::{Catalog, Song};
use crate::config::Config;
use crate::favorites::{FavoritesStore, Toggled};
use crate::filter::{filter_songs, CategoryFilter, FilterCriteria};
use crate::location::{home_location, image_url, song_location, Location};
use crate::storage::KeyValueStore;
use std::collections::BTreeSet;
use tracing::{debug, error, info};

/// Transient view state, never persisted
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub criteria: FilterCriteria,
    /// Id of the selected song
    pub selected: Option<String>,
}

/// A favorite waiting for the user to pick a category
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFavorite {
    pub song_id: String,
    pub song_title: String,
    /// Prefilled category suggestion
    pub suggested_category: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleRequest {
    Applied(Toggled),
    NeedsCategory(PendingFavorite),
    UnknownSong,
}

pub struct Songbook<S: KeyValueStore> {
    catalog: Catalog,
    favorites: FavoritesStore<S>,
    config: Config,
    view: ViewState,
    pending: Option<PendingFavorite>,
}

impl<S: KeyValueStore> Songbook<S> {
    /// Load favorites from `storage` and restore the selection from `location`.
    pub fn new(catalog: Catalog, storage: S, config: Config, location: &Location) -> Self {
        let favorites =
            FavoritesStore::load(storage, config.storage_key.clone(), &config.default_category);
        let mut songbook = Self {
            catalog,
            favorites,
            config,
            view: ViewState::default(),
            pending: None,
        };
        songbook.restore_from_location(location);
        songbook
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    // -- Filtering --

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.criteria.search = search.into();
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.view.criteria.favorites_only = favorites_only;
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.view.criteria.category = category;
    }

    pub fn filtered_songs(&self) -> Vec<&Song> {
        filter_songs(&self.catalog, &self.view.criteria, &self.favorites)
    }

    pub fn categories(&self) -> BTreeSet<String> {
        self.favorites.categories()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn category_of(&self, id: &str) -> Option<&str> {
        self.favorites.category_of(id)
    }

    // -- Selection --

    pub fn selected(&self) -> Option<&Song> {
        self.view
            .selected
            .as_deref()
            .and_then(|id| self.catalog.find(id))
    }

    /// Select a song and return the location to push. Unknown ids change
    /// nothing and return `None`.
    pub fn select(&mut self, id: &str) -> Option<Location> {
        let song = self.catalog.find(id)?;
        info!("Loading image: {}", self.image_url(song));
        self.view.selected = Some(song.id.clone());
        Some(song_location(&self.config.route_base, &song.id))
    }

    /// Close the viewer and return the location to push.
    pub fn clear_selection(&mut self) -> Location {
        self.view.selected = None;
        home_location(&self.config.route_base)
    }

    /// Make the selection match `location`. Stale or missing ids clear it.
    pub fn restore_from_location(&mut self, location: &Location) {
        self.view.selected = match location.song_id() {
            Some(id) if self.catalog.find(&id).is_some() => Some(id),
            Some(id) => {
                debug!("No song with id {id}, ignoring location {location}");
                None
            }
            None => None,
        };
    }

    // -- Favorites --

    /// Handle a star click.
    ///
    /// A favorite is removed straight away; anything else waits for a category.
    pub fn request_toggle(&mut self, id: &str) -> ToggleRequest {
        let Some(song) = self.catalog.find(id) else {
            return ToggleRequest::UnknownSong;
        };

        if self.favorites.is_favorite(id) {
            self.favorites.unset_favorite(id);
            self.reset_stale_category_filter();
            return ToggleRequest::Applied(Toggled::Removed);
        }

        let pending = PendingFavorite {
            song_id: song.id.clone(),
            song_title: song.title.clone(),
            suggested_category: self.suggested_category(),
        };
        self.pending = Some(pending.clone());
        ToggleRequest::NeedsCategory(pending)
    }

    /// Toggle `id` against an explicit category, skipping the prompt.
    pub fn toggle_favorite(&mut self, id: &str, category: &str) -> Option<Toggled> {
        self.catalog.find(id)?;
        let toggled = self.favorites.toggle(id, category);
        self.reset_stale_category_filter();
        toggled
    }

    pub fn pending(&self) -> Option<&PendingFavorite> {
        self.pending.as_ref()
    }

    /// Answer the pending category prompt. `None` or a blank label abandons it.
    pub fn resolve_pending(&mut self, category: Option<String>) -> Option<Toggled> {
        let pending = self.pending.take()?;
        let category = category?;
        let category = category.trim();
        if category.is_empty() {
            debug!("Empty category, not favoriting {}", pending.song_id);
            return None;
        }
        let previous = self
            .favorites
            .category_of(&pending.song_id)
            .map(str::to_string);
        if !self.favorites.set_favorite(&pending.song_id, category) {
            return None;
        }
        self.reset_stale_category_filter();
        Some(match previous {
            Some(from) => Toggled::Recategorized {
                from,
                to: category.to_string(),
            },
            None => Toggled::Added {
                category: category.to_string(),
            },
        })
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// The active named category, or the default bucket.
    fn suggested_category(&self) -> String {
        match &self.view.criteria.category {
            CategoryFilter::Named(name) if !name.trim().is_empty() => name.clone(),
            _ => self.config.default_category.clone(),
        }
    }

    fn reset_stale_category_filter(&mut self) {
        if let CategoryFilter::Named(name) = &self.view.criteria.category {
            if !self.favorites.categories().contains(name) {
                self.view.criteria.category = CategoryFilter::Any;
            }
        }
    }

    // -- Images --

    pub fn image_url(&self, song: &Song) -> String {
        image_url(&self.config.asset_base, &self.config.image_folder, &song.img)
    }

    pub fn selected_image_url(&self) -> Option<String> {
        self.selected().map(|song| self.image_url(song))
    }

    /// Record a failed chart load. The selection stays as it is.
    pub fn report_image_error(&self, url: &str) {
        error!("Image failed to load: {url}");
    }
}
