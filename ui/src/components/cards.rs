use dioxus::prelude::*;

use crate::content::{star_row, Highlight};

/// Grid of icon cards used across the marketing pages.
#[component]
pub fn HighlightGrid(
    items: &'static [Highlight],
    #[props(default = "card-grid")] class: &'static str,
) -> Element {
    rsx! {
        div { class: "{class}",
            for item in items.iter() {
                article { key: "{item.title}", class: "card",
                    div { class: "card__icon", "{item.icon}" }
                    h3 { class: "card__title", "{item.title}" }
                    p { class: "card__body", "{item.description}" }
                }
            }
        }
    }
}

/// A bullet list rendered with check marks.
#[component]
pub fn CheckList(items: &'static [&'static str]) -> Element {
    rsx! {
        ul { class: "check-list",
            for item in items.iter() {
                li { key: "{item}", span { class: "check-list__mark", "✓" } " {item}" }
            }
        }
    }
}

#[component]
pub fn Stars(rating: u8) -> Element {
    rsx! {
        span { class: "stars", aria_label: "{rating} / 5", "{star_row(rating)}" }
    }
}

/// Centered page heading with an optional badge above it.
#[component]
pub fn PageHeader(title: String, intro: String, badge: Option<String>) -> Element {
    rsx! {
        header { class: "page__header",
            if let Some(badge) = badge {
                span { class: "page__badge", "{badge}" }
            }
            h1 { class: "page__title", "{title}" }
            p { class: "page__intro", "{intro}" }
        }
    }
}
