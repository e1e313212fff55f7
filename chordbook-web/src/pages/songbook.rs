use crate::storage::{local_storage, LocalStorage};
use crate::{catalog, config, Route};
use chordbook_core::{CategoryFilter, Location, Songbook, ToggleRequest};
use chordbook_ui::{CategoryPrompt, ChartView, SongRow, SongbookView};
use dioxus::prelude::*;
use tracing::{debug, error, info, warn};

type SongbookState = Signal<Songbook<LocalStorage>>;

/// Owns the songbook for every route; it outlives navigation
#[component]
pub fn SongbookLayout() -> Element {
    let route = use_route::<Route>();
    let catalog = use_hook(|| {
        catalog::bundled().map_err(|e| {
            error!("Failed to load song catalog: {e}");
            e.to_string()
        })
    });
    let songbook: SongbookState = use_signal(|| {
        Songbook::new(
            catalog.clone().unwrap_or_default(),
            local_storage(),
            config::load(),
            &route.location(),
        )
    });
    use_context_provider(|| songbook);

    match catalog {
        Ok(_) => rsx! {
            Outlet::<Route> {}
        },
        Err(e) => rsx! {
            div { class: "app-error", "Failed to load songs: {e}" }
        },
    }
}

#[component]
pub fn Songs(id: String) -> Element {
    let location = Route::Songs { id }.location();
    rsx! {
        SongbookPage { location }
    }
}

#[component]
pub fn SongChart(id: String) -> Element {
    let location = Route::SongChart { id }.location();
    rsx! {
        SongbookPage { location }
    }
}

/// Wires the views to the shared songbook
#[component]
fn SongbookPage(location: Location) -> Element {
    let mut songbook = use_context::<SongbookState>();
    let route = use_route::<Route>();
    let prompt_open: ReadSignal<bool> =
        use_memo(move || songbook.read().pending().is_some()).into();

    // Pushed routes and back/forward both land here
    use_effect(use_reactive!(|location| {
        songbook.write().restore_from_location(&location);
    }));

    let navigate = move |location: Location| {
        let target = Route::from_location(&location);
        if target != route {
            navigator().push(target);
        }
    };
    let navigate_home = navigate.clone();

    let book = songbook.read();
    let view = book.view().clone();
    let rows: Vec<SongRow> = book
        .filtered_songs()
        .into_iter()
        .map(|song| SongRow {
            id: song.id.clone(),
            title: song.title.clone(),
            category: book.category_of(&song.id).map(str::to_string),
            is_selected: view.selected.as_deref() == Some(song.id.as_str()),
        })
        .collect();
    let categories: Vec<String> = book.categories().into_iter().collect();
    let chart = book.selected().map(|song| ChartView {
        title: song.title.clone(),
        image_url: book.image_url(song),
    });
    let pending = book.pending().cloned();
    drop(book);

    rsx! {
        SongbookView {
            search: view.criteria.search.clone(),
            favorites_only: view.criteria.favorites_only,
            categories,
            active_category: view.criteria.category.value().to_string(),
            rows,
            chart,
            on_search_change: move |search: String| songbook.write().set_search(search),
            on_favorites_only_change: move |checked: bool| {
                songbook.write().set_favorites_only(checked);
            },
            on_category_change: move |value: String| {
                songbook.write().set_category_filter(CategoryFilter::from_value(&value));
            },
            on_song_click: move |id: String| {
                let location = songbook.write().select(&id);
                if let Some(location) = location {
                    navigate(location);
                }
            },
            on_star_click: move |id: String| {
                let request = songbook.write().request_toggle(&id);
                match request {
                    ToggleRequest::Applied(toggled) => debug!("Favorite {id}: {toggled:?}"),
                    ToggleRequest::NeedsCategory(_) => {}
                    ToggleRequest::UnknownSong => warn!("Star clicked for unknown song {id}"),
                }
            },
            on_close_chart: move |_| {
                let location = songbook.write().clear_selection();
                navigate_home(location);
            },
            on_image_error: move |url: String| songbook.read().report_image_error(&url),
        }

        if let Some(pending) = pending {
            CategoryPrompt {
                key: "{pending.song_id}",
                is_open: prompt_open,
                song_title: pending.song_title.clone(),
                suggested_category: pending.suggested_category.clone(),
                on_save: move |category: String| {
                    let toggled = songbook.write().resolve_pending(Some(category));
                    if let Some(toggled) = toggled {
                        info!("Favorite saved: {toggled:?}");
                    }
                },
                on_cancel: move |_| songbook.write().cancel_pending(),
            }
        }
    }
}
