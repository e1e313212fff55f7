//! Songbook page - pure rendering, no state ownership

use crate::components::search_bar::SearchBar;
use crate::components::song_list::SongList;
use crate::components::song_viewer::SongViewer;
use crate::display_types::{ChartView, SongRow};
use dioxus::prelude::*;

#[component]
pub fn SongbookView(
    search: String,
    favorites_only: bool,
    categories: Vec<String>,
    active_category: String,
    rows: Vec<SongRow>,
    /// Selected chart, shown in place below the list
    chart: Option<ChartView>,
    on_search_change: EventHandler<String>,
    on_favorites_only_change: EventHandler<bool>,
    on_category_change: EventHandler<String>,
    on_song_click: EventHandler<String>,
    on_star_click: EventHandler<String>,
    on_close_chart: EventHandler<()>,
    on_image_error: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "app",
            h1 { "Chord Book" }
            SearchBar {
                search,
                favorites_only,
                categories,
                active_category,
                on_search_change,
                on_favorites_only_change,
                on_category_change,
            }
            SongList { rows, on_song_click, on_star_click }
            if let Some(chart) = chart {
                SongViewer {
                    key: "{chart.image_url}",
                    chart,
                    on_close: on_close_chart,
                    on_image_error,
                }
            }
        }
    }
}
