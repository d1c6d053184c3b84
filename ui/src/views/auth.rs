//! Sign-in and sign-up route stubs. There are no accounts behind them.

use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::t;
use crate::views::use_lang_marker;

#[component]
pub fn Login() -> Element {
    rsx! {
        AuthStub { title: t!("auth-login-title") }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        AuthStub { title: t!("auth-register-title") }
    }
}

#[component]
fn AuthStub(title: String) -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-auth",
            div { class: "card auth-card",
                h1 { "{title}" }
                p { {t!("auth-unavailable")} }
                {nav_link(NavTarget::Translator, &t!("home-cta-try"), "button button--primary button--block")}
            }
        }
    }
}
