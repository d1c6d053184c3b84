use dioxus::prelude::*;

use crate::components::cards::{HighlightGrid, PageHeader};
use crate::content::about::{MILESTONES, TEAM, VALUES};
use crate::t;
use crate::views::use_lang_marker;

#[component]
pub fn About() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-about",
            PageHeader { title: t!("about-title"), intro: t!("about-intro") }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("about-values-title")} }
                HighlightGrid { items: &VALUES[..] }
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("about-team-title")} }
                div { class: "card-grid",
                    for member in TEAM.iter() {
                        article { key: "{member.name}", class: "card team-member",
                            div { class: "team-member__avatar", "{member.avatar}" }
                            h3 { "{member.name}" }
                            p { class: "team-member__role", "{member.role}" }
                            p { class: "card__body", "{member.bio}" }
                        }
                    }
                }
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("about-journey-title")} }
                ol { class: "timeline",
                    for milestone in MILESTONES.iter() {
                        li { key: "{milestone.year}", class: "timeline__item",
                            span { class: "timeline__year", "{milestone.year}" }
                            div {
                                h3 { "{milestone.title}" }
                                p { "{milestone.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
