use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::content::footer::{FooterLink, COLUMNS, CONTACT_EMAIL, CONTACT_PHONE, SOCIAL_LINKS};
use crate::t;
use crate::views::use_lang_marker;

#[component]
pub fn SiteFooter() -> Element {
    // Re-render on locale change; the footer has no props to change.
    let _locale = use_lang_marker();
    let version = env!("CARGO_PKG_VERSION");
    let tagline = t!("tagline");
    let rights = t!("footer-rights");

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__inner",
                div { class: "site-footer__brand",
                    {nav_link(NavTarget::Home, "TranslatePro", "site-footer__brand-mark")}
                    p { "{tagline}" }
                    p { class: "site-footer__contact", "✉ {CONTACT_EMAIL}" }
                    p { class: "site-footer__contact", "☎ {CONTACT_PHONE}" }
                    div { class: "site-footer__social",
                        for social in SOCIAL_LINKS.iter() {
                            a {
                                key: "{social.name}",
                                href: social.path,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{social.name}"
                            }
                        }
                    }
                }
                for column in COLUMNS.iter() {
                    div { key: "{column.title}", class: "site-footer__column",
                        h4 { "{column.title}" }
                        ul {
                            for entry in column.links.iter() {
                                li { key: "{entry.path}", {footer_link(entry)} }
                            }
                        }
                    }
                }
            }
            div { class: "site-footer__bottom",
                span { "© TranslatePro. {rights}" }
                span { class: "site-footer__version", "v{version}" }
            }
        }
    }
}

fn footer_link(entry: &FooterLink) -> Element {
    if entry.path.starts_with('/') {
        rsx!(Link { class: "site-footer__link", to: entry.path, "{entry.name}" })
    } else {
        rsx!(a { class: "site-footer__link", href: entry.path, "{entry.name}" })
    }
}
