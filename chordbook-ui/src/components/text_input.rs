//! Text input used for search and category entry

use dioxus::prelude::*;

#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] aria_label: Option<&'static str>,
    #[props(default)] class: Option<&'static str>,
    /// Search inputs get the native clear button
    #[props(default)]
    search: bool,
    #[props(default)] autofocus: bool,
    /// Called when Enter is pressed
    #[props(default)]
    on_submit: Option<EventHandler<()>>,
) -> Element {
    let input_type = if search { "search" } else { "text" };
    let class = class.unwrap_or("text-input");

    rsx! {
        input {
            r#type: input_type,
            class,
            value: "{value}",
            placeholder,
            aria_label,
            oninput: move |e| on_input.call(e.value()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    if let Some(handler) = on_submit {
                        e.prevent_default();
                        handler.call(());
                    }
                }
            },
            onmounted: move |event| async move {
                if autofocus {
                    let _ = event.data().set_focus(true).await;
                }
            },
        }
    }
}
