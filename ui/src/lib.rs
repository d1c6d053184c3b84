//! Shared UI crate for TranslatePro. Pages, the translator widget and the
//! logic behind it live here; the platform crates only add routing.

pub mod content;
pub mod core;
pub mod i18n;
pub mod views;

use dioxus::prelude::*;

/// Shared site theme. Web links it; desktop embeds the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod cards;
    pub mod translator;

    mod copy_button;
    pub use copy_button::CopyButton;

    mod site_footer;
    pub use site_footer::SiteFooter;
}
