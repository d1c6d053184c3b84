use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::t;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body")} }
            code { class: "page-not-found__path", "{path}" }
            {nav_link(NavTarget::Home, &NavTarget::Home.label(), "button button--primary")}
        }
    }
}
