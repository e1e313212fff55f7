//! In-place chord chart viewer
//!
//! A failed image load is reported but the viewer stays open, showing the
//! browser's broken-image placeholder.

use crate::components::button::{Button, ButtonVariant};
use crate::display_types::ChartView;
use dioxus::prelude::*;

#[component]
pub fn SongViewer(
    chart: ChartView,
    on_close: EventHandler<()>,
    /// Called with the image URL that failed
    on_image_error: EventHandler<String>,
) -> Element {
    let url_for_error = chart.image_url.clone();

    rsx! {
        div { class: "song-viewer",
            div { class: "song-viewer-header",
                h2 { class: "song-viewer-title", "{chart.title}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    aria_label: "Close chart".to_string(),
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
            img {
                class: "song-image",
                src: "{chart.image_url}",
                alt: "{chart.title}",
                onerror: move |_| on_image_error.call(url_for_error.clone()),
            }
        }
    }
}
