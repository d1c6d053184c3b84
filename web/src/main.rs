use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder, NavTarget};
use ui::components::{AppNavbar, SiteFooter};
use ui::core::backend::{BackendHandle, MockBackend};
use ui::core::capabilities::Capabilities;
use ui::core::platform::Platform;
use ui::core::settings;
use ui::views::{
    About, ApiDocs, Business, Contact, Features, Home, Login, NotFound, Pricing, Register,
    Translator, Workflow,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/translator")]
    Translator {},
    #[route("/features")]
    Features {},
    #[route("/pricing")]
    Pricing {},
    #[route("/about")]
    About {},
    #[route("/api")]
    ApiDocs {},
    #[route("/contact")]
    Contact {},
    #[route("/workflow")]
    Workflow {},
    #[route("/business")]
    Business {},
    #[route("/auth/login")]
    Login {},
    #[route("/auth/register")]
    Register {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::Translator => Route::Translator {},
            NavTarget::Features => Route::Features {},
            NavTarget::Pricing => Route::Pricing {},
            NavTarget::Api => Route::ApiDocs {},
            NavTarget::Workflow => Route::Workflow {},
            NavTarget::Business => Route::Business {},
            NavTarget::About => Route::About {},
            NavTarget::Contact => Route::Contact {},
            NavTarget::Login => Route::Login {},
            NavTarget::Register => Route::Register {},
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
    rsx!(Link {
        class: "navbar__link {class}",
        active_class: "navbar__link--active",
        to: Route::from(target),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    let demo = use_context_provider(settings::load_settings);
    use_context_provider(Capabilities::system);
    use_context_provider(|| Rc::new(MockBackend::from_settings(&demo)) as BackendHandle);
    use_hook(|| {
        tracing::info!(
            platform = Platform::current().as_str(),
            latency_ms = demo.latency_ms,
            "TranslatePro started"
        )
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Remount the routed tree on locale change so memoized components
        // re-run their `t!` lookups.
        for locale in std::iter::once(lang_code()) {
            div { key: "{locale}", class: "app-root", Router::<Route> {} }
        }
    }
}

/// Web layout around the shared navbar and footer, which lets them link
/// through the web-specific `Route` enum.
#[component]
fn WebLayout() -> Element {
    rsx! {
        AppNavbar { }
        main { class: "site-main", Outlet::<Route> {} }
        SiteFooter { }
    }
}
