use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::components::cards::{CheckList, HighlightGrid, PageHeader};
use crate::content::features::{ADDITIONAL_FEATURES, MAIN_FEATURES};
use crate::t;
use crate::views::use_lang_marker;

#[component]
pub fn Features() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-features",
            PageHeader { title: t!("features-title"), intro: t!("features-intro") }

            div { class: "feature-rows",
                for (i, feature) in MAIN_FEATURES.iter().enumerate() {
                    article {
                        key: "{feature.title}",
                        class: "feature-row",
                        class: if i % 2 == 1 { "feature-row--reversed" },
                        div { class: "feature-row__copy",
                            span { class: "page__badge", "{feature.badge}" }
                            h2 { "{feature.icon} {feature.title}" }
                            p { "{feature.description}" }
                            CheckList { items: feature.points }
                        }
                    }
                }
            }

            section { class: "page__section",
                HighlightGrid { items: &ADDITIONAL_FEATURES[..], class: "card-grid card-grid--three" }
            }

            div { class: "cta-band",
                {nav_link(NavTarget::Translator, &t!("home-cta-try"), "button button--primary button--large")}
            }
        }
    }
}
