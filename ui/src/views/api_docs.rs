use api::contract::{API_BASE_URL, ENDPOINTS};
use dioxus::prelude::*;

use crate::components::cards::{HighlightGrid, PageHeader};
use crate::components::CopyButton;
use crate::content::api_docs::{
    SampleLanguage, API_FEATURES, API_TIERS, AUTH_HEADER_SAMPLE, EXAMPLE_RESPONSE,
};
use crate::t;
use crate::views::use_lang_marker;

#[component]
pub fn ApiDocs() -> Element {
    let lang_marker = use_lang_marker();
    let mut active = use_signal(|| SampleLanguage::JavaScript);
    let sample = active().code();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-api",
            PageHeader {
                title: t!("api-title"),
                intro: t!("api-intro"),
                badge: "Developer API".to_string(),
            }

            HighlightGrid { items: &API_FEATURES[..] }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("api-quickstart-title")} }
                div { class: "code-panel",
                    div { class: "code-panel__tabs", role: "tablist",
                        for lang in SampleLanguage::ALL {
                            button {
                                key: "{lang.label()}",
                                r#type: "button",
                                role: "tab",
                                class: "code-panel__tab",
                                class: if active() == lang { "code-panel__tab--active" },
                                aria_selected: "{active() == lang}",
                                onclick: move |_| active.set(lang),
                                "{lang.label()}"
                            }
                        }
                        CopyButton {
                            // Re-keyed per tab so the acknowledgement does not leak across samples.
                            key: "{active().label()}",
                            text: sample.to_string(),
                            label: t!("api-copy-code"),
                            copied_label: t!("translator-copied"),
                            class: "button button--ghost code-panel__copy".to_string(),
                        }
                    }
                    pre { class: "code-panel__body", code { "{sample}" } }
                }
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("api-response-title")} }
                pre { class: "code-panel__body", code { "{EXAMPLE_RESPONSE}" } }
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("api-endpoints-title")} }
                p { class: "endpoints__base",
                    {t!("api-base-url")}
                    " "
                    code { "{API_BASE_URL}" }
                }
                div { class: "endpoints",
                    for endpoint in ENDPOINTS.iter() {
                        article { key: "{endpoint.path}", class: "endpoint",
                            div { class: "endpoint__head",
                                span {
                                    class: "endpoint__method endpoint__method--{endpoint.method.as_str().to_lowercase()}",
                                    "{endpoint.method.as_str()}"
                                }
                                code { class: "endpoint__path", "{endpoint.path}" }
                            }
                            p { "{endpoint.description}" }
                            div { class: "analysis__tags",
                                for param in endpoint.params.iter() {
                                    span { key: "{param}", class: "tag tag--neutral", "{param}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "page__section",
                h2 { class: "page__section-title", {t!("api-pricing-title")} }
                div { class: "card-grid card-grid--three",
                    for tier in API_TIERS.iter() {
                        article {
                            key: "{tier.name}",
                            class: "card plan",
                            class: if tier.is_enterprise() { "plan--popular" },
                            h3 { class: "plan__name", "{tier.name}" }
                            div { class: "plan__price", strong { "{tier.price}" } }
                            p { class: "plan__description", {t!("api-tier-requests", requests = tier.requests)} }
                            ul { class: "check-list",
                                for feature in tier.features.iter() {
                                    li { key: "{feature}", span { class: "check-list__mark", "✓" } " {feature}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "page__section auth-note",
                h2 { class: "page__section-title", {t!("api-auth-title")} }
                p { {t!("api-auth-body")} }
                pre { class: "code-panel__body", code { "{AUTH_HEADER_SAMPLE}" } }
                p { class: "auth-note__warning", "⚠️ " {t!("api-auth-warning")} }
            }
        }
    }
}
