//! Search box, favorites-only switch and category filter

use crate::components::text_input::TextInput;
use dioxus::prelude::*;

/// Select value meaning "any favorited category"
pub const ANY_CATEGORY: &str = "";

#[component]
pub fn SearchBar(
    search: String,
    favorites_only: bool,
    /// Categories in use, sorted
    categories: Vec<String>,
    /// Active category, [`ANY_CATEGORY`] for all
    active_category: String,
    on_search_change: EventHandler<String>,
    on_favorites_only_change: EventHandler<bool>,
    on_category_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "controls",
            TextInput {
                value: search,
                on_input: on_search_change,
                placeholder: "Search songs...",
                aria_label: "Search songs",
                class: "search-input",
                search: true,
            }

            label { class: "favorites-switch",
                input {
                    r#type: "checkbox",
                    checked: favorites_only,
                    onchange: move |e| on_favorites_only_change.call(e.checked()),
                }
                "Show Favorites Only"
            }

            if favorites_only && !categories.is_empty() {
                CategorySelect { categories, active_category, on_change: on_category_change }
            }
        }
    }
}

#[component]
fn CategorySelect(
    categories: Vec<String>,
    active_category: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            class: "category-select",
            aria_label: "Favorite category",
            value: "{active_category}",
            onchange: move |e| on_change.call(e.value()),
            option {
                value: ANY_CATEGORY,
                selected: active_category == ANY_CATEGORY,
                "All favorites"
            }
            for category in categories {
                option {
                    key: "{category}",
                    value: "{category}",
                    selected: category == active_category,
                    "{category}"
                }
            }
        }
    }
}
