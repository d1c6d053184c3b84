#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::rc::Rc;

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
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
    #[layout(DesktopLayout)]
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

/// The webview has no asset server, so the shared theme is compiled in.
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    let window = WindowBuilder::new()
        .with_title(format!("TranslatePro v{}", env!("CARGO_PKG_VERSION")))
        .with_inner_size(LogicalSize::new(1280.0, 860.0))
        .with_min_inner_size(LogicalSize::new(420.0, 640.0));

    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(target: NavTarget, label: &str, class: &str) -> Element {
    rsx!(Link {
        class: "navbar__link {class}",
        active_class: "navbar__link--active",
        to: Route::from(target),
        "{label}"
    })
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
            source = %demo.default_source,
            target = %demo.default_target,
            "TranslatePro started"
        )
    });

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }

        // Remount every route when the UI locale changes. The key only takes
        // effect on list items, hence the one-element loop.
        for locale in std::iter::once(lang_code()) {
            div { key: "{locale}", class: "app-root", Router::<Route> { } }
        }
    }
}

/// Desktop layout around the shared navbar and footer, which lets them link
/// through the desktop-specific `Route` enum.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        AppNavbar { }
        main { class: "site-main", Outlet::<Route> {} }
        SiteFooter { }
    }
}
