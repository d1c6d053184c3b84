//! UI string localization for the TranslatePro site chrome.
//!
//! Message files live in `ui/i18n/<locale>/translatepro-ui.ftl` and are
//! embedded at compile time, so web and desktop builds ship the same bundles.
//! `en-US` is the fallback and the reference key set; the completeness tests
//! under `src/tests` and `tests/` keep the other locales in step with it.
//!
//! Call [`init`] once before rendering (repeat calls are no-ops), then look
//! strings up with [`t!`](crate::t). The initial locale comes from the
//! browser (`navigator.languages`) or the OS locale list.
//!
//! This is unrelated to the languages offered by the translator widget,
//! which come from `api::language::LANGUAGES`.

use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Shorthand for `fl!(&*LOADER, ...)`.
///
/// ```ignore
/// let label = t!("nav-translator");
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// FTL file stem. `i18n.toml` pins the same `domain` for `fl!`.
const DOMAIN: &str = "translatepro-ui";
const FALLBACK_LOCALE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default());
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match select(&requested) {
            Ok(selected) => tracing::debug!(?selected, "ui locale selected"),
            Err(err) => tracing::warn!(%err, "locale selection failed; using {FALLBACK_LOCALE}"),
        }
    });
}

/// Switch the UI locale. Unparseable tags are ignored; tags with no bundle
/// fall back to `en-US`.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparseable locale tag");
        return Ok(());
    };
    select(&[lang]).map(|_| ())
}

/// Load bundles for `requested`. Isolation marks around placeables are
/// turned off since counts are rendered inline in HTML.
fn select(
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, i18n_embed::I18nEmbedError> {
    let selected = i18n_embed::select(&*LOADER, &Localizations, requested)?;
    LOADER.set_use_isolating(false);
    Ok(selected)
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Locale tags with an embedded bundle, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

/// Label for the locale picker, written in the locale itself.
pub fn locale_display_name(tag: &str) -> &str {
    match tag {
        "en-US" => "English",
        "es-ES" => "Español",
        "fr-FR" => "Français",
        other => other,
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
