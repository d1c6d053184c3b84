//! Route-level pages. Platforms map their `Route` variants onto these.

mod about;
mod api_docs;
mod auth;
mod business;
mod contact;
mod features;
mod home;
mod not_found;
mod pricing;
mod translator;
mod workflow;

pub use about::About;
pub use api_docs::ApiDocs;
pub use auth::{Login, Register};
pub use business::Business;
pub use contact::Contact;
pub use features::Features;
pub use home::Home;
pub use not_found::NotFound;
pub use pricing::Pricing;
pub use translator::Translator;
pub use workflow::Workflow;

use dioxus::prelude::*;

/// Subscribe to the global language code (if the platform provides one) so a
/// page re-renders as soon as the locale changes in the navbar.
///
/// The returned value should be rendered in a hidden node to keep the
/// dependency alive.
pub(crate) fn use_lang_marker() -> String {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    lang_code.as_ref().map(|s| s()).unwrap_or_default()
}
