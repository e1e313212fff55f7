//! Native `<dialog>` modal
//!
//! The element is captured on mount and driven from `is_open`. Escape and
//! backdrop clicks report through `on_close`; the parent decides whether the
//! dialog actually closes.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlDialogElement;

/// Open or close `dialog` unless it is already in that state.
fn sync_open(dialog: &HtmlDialogElement, open: bool) {
    if dialog.open() == open {
        return;
    }
    if !open {
        dialog.close();
    } else if let Err(e) = dialog.show_modal() {
        tracing::warn!("Failed to open dialog: {e:?}");
    }
}

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Escape key or backdrop click
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let mut element = use_signal(|| None::<HtmlDialogElement>);

    use_effect(move || {
        let open = is_open();
        if let Some(dialog) = element.read().as_ref() {
            sync_open(dialog, open);
        }
    });

    let extra_class = class.unwrap_or_default();

    rsx! {
        dialog {
            // Layout classes go on the inner container; a display class here
            // would show the dialog while closed
            class: "modal {extra_class}",
            onmounted: move |evt: MountedEvent| {
                let mounted = evt
                    .data()
                    .downcast::<web_sys::Element>()
                    .and_then(|el| el.dyn_ref::<HtmlDialogElement>())
                    .cloned();
                element.set(mounted);
            },
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "modal-backdrop",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
