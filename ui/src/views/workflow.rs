use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::components::cards::{CheckList, PageHeader};
use crate::content::workflow::{INTEGRATIONS, STEPS};
use crate::t;
use crate::views::use_lang_marker;

#[component]
pub fn Workflow() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-workflow",
            PageHeader { title: t!("workflow-title"), intro: t!("workflow-intro") }

            ol { class: "steps",
                for (i, step) in STEPS.iter().enumerate() {
                    li { key: "{step.title}", class: "steps__item",
                        span { class: "steps__number", "{i + 1}" }
                        div { class: "steps__body",
                            h2 { "{step.icon} {step.title}" }
                            p { "{step.description}" }
                            CheckList { items: &step.points[..] }
                        }
                    }
                }
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("workflow-integrations-title")} }
                div { class: "card-grid",
                    for integration in INTEGRATIONS.iter() {
                        article { key: "{integration.name}", class: "card",
                            h3 { class: "card__title", "{integration.name}" }
                            p { class: "card__body", "{integration.description}" }
                        }
                    }
                }
            }

            div { class: "cta-band",
                {nav_link(NavTarget::Translator, &t!("home-cta-try"), "button button--primary button--large")}
                {nav_link(NavTarget::Api, &t!("home-cta-api"), "button button--ghost button--large")}
            }
        }
    }
}
