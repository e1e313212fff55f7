//! Category prompt shown when a song is starred
//!
//! Answers the pending favorite: Save submits the typed label, Cancel,
//! Escape and backdrop clicks abandon it.

use crate::components::button::{Button, ButtonVariant};
use crate::components::modal::Modal;
use crate::components::text_input::TextInput;
use dioxus::prelude::*;

#[component]
pub fn CategoryPrompt(
    is_open: ReadSignal<bool>,
    song_title: String,
    /// Prefilled label
    suggested_category: String,
    on_save: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    // Seeded once per mount; key the prompt by song so it resets per request
    let mut value = use_signal(|| suggested_category.clone());

    let can_save = !value().trim().is_empty();

    rsx! {
        Modal { is_open, on_close: on_cancel,
            div { class: "prompt",
                h2 { class: "prompt-title", "Add to favorites" }
                p { class: "prompt-message", "Category for “{song_title}”:" }
                TextInput {
                    value: value(),
                    on_input: move |v| value.set(v),
                    aria_label: "Category",
                    autofocus: true,
                    on_submit: move |_| {
                        if !value.peek().trim().is_empty() {
                            on_save.call(value.peek().clone());
                        }
                    },
                }
                div { class: "prompt-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: !can_save,
                        onclick: move |_| on_save.call(value.peek().clone()),
                        "Save"
                    }
                }
            }
        }
    }
}
