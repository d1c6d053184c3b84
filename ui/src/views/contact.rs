use dioxus::prelude::*;

use crate::components::cards::PageHeader;
use crate::content::footer::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::t;
use crate::views::use_lang_marker;

/// Contact page. The form is presentational; submitting only acknowledges
/// locally since there is no backend to deliver messages to.
#[component]
pub fn Contact() -> Element {
    let lang_marker = use_lang_marker();
    let mut sent = use_signal(|| false);

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-contact",
            PageHeader { title: t!("contact-title"), intro: t!("contact-intro") }

            div { class: "contact",
                div { class: "contact__details card",
                    p { "✉ " a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" } }
                    p { "☎ {CONTACT_PHONE}" }
                    p { "📍 San Francisco, CA" }
                }

                form {
                    class: "contact__form card",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        tracing::info!("contact form submitted");
                        sent.set(true);
                    },
                    h2 { {t!("contact-form-title")} }
                    label { r#for: "contact-name", {t!("contact-name")} }
                    input { id: "contact-name", name: "name", r#type: "text", required: true }
                    label { r#for: "contact-email", {t!("contact-email")} }
                    input { id: "contact-email", name: "email", r#type: "email", required: true }
                    label { r#for: "contact-message", {t!("contact-message")} }
                    textarea { id: "contact-message", name: "message", rows: 5, required: true }
                    button { r#type: "submit", class: "button button--primary", disabled: sent(),
                        {t!("contact-send")}
                    }
                    if sent() {
                        p { class: "contact__sent", role: "status", "✓ " {t!("contact-sent")} }
                    }
                }
            }
        }
    }
}
