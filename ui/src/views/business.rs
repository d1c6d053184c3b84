use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::components::cards::{CheckList, PageHeader, Stars};
use crate::content::business::{CASE_STUDIES, ENTERPRISE_FEATURES, USE_CASES};
use crate::t;
use crate::views::use_lang_marker;

#[component]
pub fn Business() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-business",
            PageHeader { title: t!("business-title"), intro: t!("business-intro") }

            div { class: "card-grid",
                for case in USE_CASES.iter() {
                    article { key: "{case.title}", class: "card",
                        div { class: "card__icon", "{case.icon}" }
                        h3 { class: "card__title", "{case.title}" }
                        p { class: "card__body", "{case.description}" }
                        CheckList { items: &case.benefits[..] }
                    }
                }
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("business-features-title")} }
                div { class: "feature-pills",
                    for feature in ENTERPRISE_FEATURES.iter() {
                        span { key: "{feature}", class: "tag tag--accent", "✓ {feature}" }
                    }
                }
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("business-stories-title")} }
                div { class: "card-grid card-grid--three",
                    for study in CASE_STUDIES.iter() {
                        article { key: "{study.company}", class: "card testimonial",
                            Stars { rating: study.rating }
                            h3 { "{study.company}" }
                            span { class: "tag tag--neutral", "{study.industry}" }
                            p { class: "testimonial__quote", "\"{study.quote}\"" }
                            p { class: "testimonial__role", "{study.author}" }
                        }
                    }
                }
            }

            div { class: "cta-band",
                {nav_link(NavTarget::Contact, &t!("home-final-sales"), "button button--primary button--large")}
            }
        }
    }
}
