//! Song list - one row per filtered song

use crate::components::button::StarButton;
use crate::display_types::SongRow;
use dioxus::prelude::*;

#[component]
pub fn SongList(
    rows: Vec<SongRow>,
    on_song_click: EventHandler<String>,
    on_star_click: EventHandler<String>,
) -> Element {
    if rows.is_empty() {
        return rsx! {
            div { class: "song-list-empty", "No songs match." }
        };
    }

    rsx! {
        div { class: "song-list", role: "list",
            for row in rows {
                SongListItem {
                    key: "{row.id}",
                    row,
                    on_click: on_song_click,
                    on_star_click,
                }
            }
        }
    }
}

#[component]
fn SongListItem(
    row: SongRow,
    on_click: EventHandler<String>,
    on_star_click: EventHandler<String>,
) -> Element {
    let selected_class = if row.is_selected { "selected" } else { "" };
    let is_favorite = row.is_favorite();
    let id_for_click = row.id.clone();
    let id_for_star = row.id.clone();

    rsx! {
        div {
            class: "song-item {selected_class}",
            role: "listitem",
            onclick: move |_| on_click.call(id_for_click.clone()),
            span { class: "song-title", "{row.title}" }
            if let Some(category) = row.category.as_ref() {
                span { class: "category-badge", "{category}" }
            }
            StarButton {
                is_favorite,
                title: row.title.clone(),
                onclick: move |_| on_star_click.call(id_for_star.clone()),
            }
        }
    }
}
