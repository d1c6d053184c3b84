use dioxus::prelude::*;

use crate::t;

#[component]
pub fn TranslatorHeader() -> Element {
    rsx! {
        div { class: "translator__header",
            div { class: "translator__logo",
                span { class: "translator__logo-mark", "🌐" }
                h1 { class: "translator__title", {t!("translator-title")} }
            }
            p { class: "translator__subtitle", {t!("translator-subtitle")} }
        }
    }
}
