//! Buttons

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Filled accent - for the confirming action
    Primary,
    /// Muted - for cancel/close
    Secondary,
    /// Text only
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = match &class {
        Some(extra) => format!("{} {extra}", variant.class()),
        None => variant.class().to_string(),
    };

    rsx! {
        button {
            class: "{computed_class}",
            r#type: "button",
            disabled,
            aria_label: aria_label.as_deref(),
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Star toggle shown on every song row.
///
/// Stops the click from reaching the row, which would otherwise select the song.
#[component]
pub fn StarButton(is_favorite: bool, title: String, onclick: EventHandler<()>) -> Element {
    let (glyph, state_class, label) = if is_favorite {
        ("★", "favorited", format!("Remove {title} from favorites"))
    } else {
        ("☆", "", format!("Add {title} to favorites"))
    };

    rsx! {
        button {
            class: "favorite-btn {state_class}",
            r#type: "button",
            aria_label: "{label}",
            aria_pressed: if is_favorite { "true" } else { "false" },
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                onclick.call(());
            },
            "{glyph}"
        }
    }
}
