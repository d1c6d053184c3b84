use api::display_name;
use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::components::cards::{HighlightGrid, Stars};
use crate::content::home::{
    DEMO_SAMPLE_INPUT, DEMO_SAMPLE_OUTPUT, DEMO_SAMPLE_TAGS, FEATURES, STATS, TESTIMONIALS,
};
use crate::t;
use crate::views::use_lang_marker;

#[component]
pub fn Home() -> Element {
    let lang_marker = use_lang_marker();
    let sample_from = display_name("en");
    let sample_to = display_name("es");

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",
            div { class: "hero",
                span { class: "page__badge", "✨ " {t!("home-badge")} }
                h1 { class: "hero__title", {t!("home-title")} }
                p { class: "hero__intro", {t!("home-intro")} }
                div { class: "hero__actions",
                    {nav_link(NavTarget::Translator, &t!("home-cta-try"), "button button--primary button--large")}
                    {nav_link(NavTarget::Api, &t!("home-cta-api"), "button button--ghost button--large")}
                }
                div { class: "stats",
                    for stat in STATS.iter() {
                        div { key: "{stat.label}", class: "stats__item",
                            strong { class: "stats__value", "{stat.value}" }
                            span { class: "stats__label", "{stat.label}" }
                        }
                    }
                }
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("home-why-title")} }
                HighlightGrid { items: &FEATURES[..] }
            }

            section { class: "page__section demo-preview",
                h2 { class: "page__section-title", {t!("home-demo-title")} }
                div { class: "demo-preview__panes",
                    div { class: "demo-preview__pane",
                        span { class: "demo-preview__lang", "{sample_from}" }
                        p { "{DEMO_SAMPLE_INPUT}" }
                    }
                    div { class: "demo-preview__pane demo-preview__pane--output",
                        span { class: "demo-preview__lang", "{sample_to}" }
                        p { "{DEMO_SAMPLE_OUTPUT}" }
                        div { class: "analysis__tags",
                            for tag in DEMO_SAMPLE_TAGS.iter() {
                                span { key: "{tag}", class: "tag tag--accent", "{tag}" }
                            }
                        }
                    }
                }
                {nav_link(NavTarget::Translator, &t!("home-cta-try"), "button button--primary")}
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("home-testimonials-title")} }
                div { class: "card-grid card-grid--three",
                    for testimonial in TESTIMONIALS.iter() {
                        article { key: "{testimonial.name}", class: "card testimonial",
                            Stars { rating: testimonial.rating }
                            p { class: "testimonial__quote", "\"{testimonial.content}\"" }
                            div { class: "testimonial__author",
                                span { class: "testimonial__avatar", "{testimonial.avatar}" }
                                div {
                                    strong { "{testimonial.name}" }
                                    p { class: "testimonial__role", "{testimonial.role}, {testimonial.company}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "page__section cta-band",
                h2 { {t!("home-final-title")} }
                div { class: "hero__actions",
                    {nav_link(NavTarget::Register, &t!("home-final-signup"), "button button--primary button--large")}
                    {nav_link(NavTarget::Contact, &t!("home-final-sales"), "button button--ghost button--large")}
                }
            }
        }
    }
}
