pub mod catalog;
pub mod config;
pub mod pages;
pub mod storage;

use chordbook_core::{home_location, song_location, Location};
use dioxus::prelude::*;
use pages::{SongChart, SongbookLayout, Songs};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Paths are relative to `base_path` in Dioxus.toml.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SongbookLayout)]
    #[route("/?:id")]
    Songs { id: String },
    #[route("/song/:id")]
    SongChart { id: String },
}

impl Route {
    /// Songbook location this route stands for.
    pub fn location(&self) -> Location {
        match self {
            Route::SongChart { id } => Location::new(format!("/song/{id}"), ""),
            Route::Songs { id } if id.is_empty() => home_location("/"),
            Route::Songs { id } => song_location("/", id),
        }
    }

    /// Route to navigate to for a location handed out by the songbook.
    pub fn from_location(location: &Location) -> Self {
        match location.song_id() {
            Some(id) if location.query.is_empty() => Route::SongChart { id },
            Some(id) => Route::Songs { id },
            None => Route::Songs { id: String::new() },
        }
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Chord Book" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chordbook_core::{Config, MemoryStorage, Songbook};

    fn songs(id: &str) -> Route {
        Route::Songs { id: id.to_string() }
    }

    #[test]
    fn numeric_ids_navigate_to_song_path() {
        assert_eq!(
            Route::from_location(&song_location("/", "17")),
            Route::SongChart { id: "17".to_string() }
        );
    }

    #[test]
    fn other_ids_navigate_with_query() {
        assert_eq!(
            Route::from_location(&song_location("/", "blue moon")),
            songs("blue moon")
        );
    }

    #[test]
    fn home_has_empty_id() {
        assert_eq!(Route::from_location(&home_location("/")), songs(""));
        assert_eq!(songs("").location().song_id(), None);
    }

    #[test]
    fn routes_keep_the_song_id() {
        for id in ["3", "17", "blue moon", "folk-1"] {
            let route = Route::from_location(&song_location("/", id));
            assert_eq!(route.location().song_id().as_deref(), Some(id));
        }
        // `/?id=12` typed by hand
        assert_eq!(songs("12").location().song_id().as_deref(), Some("12"));
    }

    #[test]
    fn non_numeric_song_path_selects_nothing() {
        let route = Route::SongChart { id: "abc".to_string() };
        assert_eq!(route.location().song_id(), None);
    }

    #[test]
    fn matched_route_restores_selection() {
        let catalog = catalog::bundled().unwrap();
        let first = catalog.list()[0].id.clone();
        let mut book = Songbook::new(
            catalog,
            MemoryStorage::new(),
            Config::default(),
            &songs("").location(),
        );
        assert!(book.selected().is_none());

        book.restore_from_location(&Route::SongChart { id: first.clone() }.location());
        assert_eq!(book.selected().map(|s| s.id.clone()), Some(first.clone()));

        // Back to the list
        book.restore_from_location(&songs("").location());
        assert!(book.selected().is_none());

        let pushed = book.select(&first).unwrap();
        assert_eq!(Route::from_location(&pushed), Route::SongChart { id: first });
    }
}
