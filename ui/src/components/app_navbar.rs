use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Every in-app destination the site chrome links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Translator,
    Features,
    Pricing,
    Api,
    Workflow,
    Business,
    About,
    Contact,
    Login,
    Register,
}

impl NavTarget {
    /// Entries of the main navigation, in display order.
    pub const MAIN: [NavTarget; 9] = [
        Self::Home,
        Self::Translator,
        Self::Features,
        Self::Pricing,
        Self::Api,
        Self::Workflow,
        Self::Business,
        Self::About,
        Self::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Translator => "/translator",
            Self::Features => "/features",
            Self::Pricing => "/pricing",
            Self::Api => "/api",
            Self::Workflow => "/workflow",
            Self::Business => "/business",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Login => "/auth/login",
            Self::Register => "/auth/register",
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Home => t!("nav-home"),
            Self::Translator => t!("nav-translator"),
            Self::Features => t!("nav-features"),
            Self::Pricing => t!("nav-pricing"),
            Self::Api => t!("nav-api"),
            Self::Workflow => t!("nav-workflow"),
            Self::Business => t!("nav-business"),
            Self::About => t!("nav-about"),
            Self::Contact => t!("nav-contact"),
            Self::Login => t!("nav-sign-in"),
            Self::Register => t!("nav-get-started"),
        }
    }
}

/// Platforms register a `NavBuilder` so `ui` can render router links without
/// knowing each platform's `Route` enum.
///
/// `link` receives the destination, the localized label and extra CSS classes
/// and must return a `Link` whose only child is that label.
///
/// ```ignore
/// fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
///     rsx!(Link { class: "navbar__link {class}", to: Route::from(target), "{label}" })
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a registered builder the navbar falls back to plain `Link`s with
/// string paths.
pub struct NavBuilder {
    pub link: fn(target: NavTarget, label: &str, class: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("nav builder already registered");
    }
}

/// Render a link to `target` through the registered builder.
pub fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(target, label, class),
        None => rsx!(Link {
            class: "navbar__link {class}",
            to: target.path(),
            "{label}"
        }),
    }
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let mut menu_open = use_signal(|| false);
    let show_switcher = langs().len() > 1;
    // Global language code signal, if the platform provided one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                tracing::info!(lang = %val, "language switched");
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let links = NavTarget::MAIN.iter().map(|target| {
        let label = target.label();
        rsx! {
            span { key: "{target.path()}", onclick: move |_| menu_open.set(false),
                {nav_link(*target, &label, "")}
            }
        }
    });

    let links_class = if menu_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker keeps a reactive dependency on the global language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {nav_link(NavTarget::Home, "TranslatePro", "navbar__brand-mark")}
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_label: t!("nav-menu-toggle"),
                    aria_expanded: "{menu_open()}",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "✕" } else { "☰" }
                }

                nav { class: "{links_class}", {links} }

                div { class: "navbar__actions",
                    {nav_link(NavTarget::Login, &NavTarget::Login.label(), "button button--ghost")}
                    {nav_link(NavTarget::Register, &NavTarget::Register.label(), "button button--primary")}
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                let name = i18n::locale_display_name(code).to_string();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{name}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn nav_paths_are_unique_and_absolute() {
        let all = NavTarget::MAIN
            .iter()
            .chain([NavTarget::Login, NavTarget::Register].iter());
        let mut seen = HashSet::new();
        for target in all {
            assert!(target.path().starts_with('/'));
            assert!(seen.insert(target.path()), "{target:?} path reused");
        }
    }

    #[test]
    fn labels_are_localized() {
        i18n::init();
        for target in NavTarget::MAIN {
            let label = target.label();
            assert!(!label.is_empty());
            assert!(!label.starts_with("nav-"), "{target:?} label not resolved");
        }
    }
}
