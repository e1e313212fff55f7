//! Song list filtering

use crate::catalog::{Catalog, Song};
use crate::favorites::FavoritesStore;
use crate::storage::KeyValueStore;

/// Which favorites pass when showing favorites only
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Any favorited song, whatever its category
    #[default]
    Any,
    Named(String),
}

impl CategoryFilter {
    /// Map a select value to a filter; the empty value means [`CategoryFilter::Any`].
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() {
            CategoryFilter::Any
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::Any => "",
            CategoryFilter::Named(name) => name,
        }
    }

    fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub favorites_only: bool,
    pub category: CategoryFilter,
}

/// Whether a single song passes the criteria.
pub fn matches<S: KeyValueStore>(
    song: &Song,
    criteria: &FilterCriteria,
    favorites: &FavoritesStore<S>,
) -> bool {
    title_matches(song, &criteria.search) && favorite_matches(song, criteria, favorites)
}

fn title_matches(song: &Song, search: &str) -> bool {
    song.title.to_lowercase().contains(&search.to_lowercase())
}

fn favorite_matches<S: KeyValueStore>(
    song: &Song,
    criteria: &FilterCriteria,
    favorites: &FavoritesStore<S>,
) -> bool {
    if !criteria.favorites_only {
        return true;
    }
    favorites
        .category_of(&song.id)
        .is_some_and(|category| criteria.category.accepts(category))
}

/// Songs passing the criteria, in catalog order.
pub fn filter_songs<'a, S: KeyValueStore>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
    favorites: &FavoritesStore<S>,
) -> Vec<&'a Song> {
    catalog
        .list()
        .iter()
        .filter(|song| matches(song, criteria, favorites))
        .collect()
}
