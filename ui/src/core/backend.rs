//! Translation backends.
//!
//! The controller only sees [`TranslationBackend`]; swapping the mock for a
//! real service means providing another implementation.

use std::rc::Rc;
use std::time::Duration;

use api::{LanguageCode, Translation, TranslateError};
use async_trait::async_trait;

use super::settings::DemoSettings;
use super::timing;

#[async_trait(?Send)]
pub trait TranslationBackend {
    async fn translate(
        &self,
        text: &str,
        from: &LanguageCode,
        to: &LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// True for stand-ins whose output does not reflect the input.
    fn is_placeholder(&self) -> bool {
        false
    }
}

/// Shared handle used to place a backend in the Dioxus context.
pub type BackendHandle = Rc<dyn TranslationBackend>;

/// Checks every backend applies before translating.
pub fn validate_request(
    text: &str,
    from: &LanguageCode,
    to: &LanguageCode,
) -> Result<(), TranslateError> {
    if text.trim().is_empty() {
        return Err(TranslateError::InvalidInput);
    }
    for code in [from, to] {
        if !code.is_supported() {
            return Err(TranslateError::unsupported(code.as_str()));
        }
    }
    Ok(())
}

/// Fixed-delay stand-in for a translation service.
///
/// Every request resolves to [`api::MOCK_TRANSLATION`] with the canned word or
/// sentence analysis. The output is not a translation of the input.
#[derive(Debug, Clone)]
pub struct MockBackend {
    latency: Duration,
}

impl MockBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_settings(settings: &DemoSettings) -> Self {
        Self::new(settings.latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::from_settings(&DemoSettings::default())
    }
}

#[async_trait(?Send)]
impl TranslationBackend for MockBackend {
    async fn translate(
        &self,
        text: &str,
        from: &LanguageCode,
        to: &LanguageCode,
    ) -> Result<Translation, TranslateError> {
        validate_request(text, from, to)?;
        timing::sleep_ms(timing::millis(self.latency)).await;
        Ok(Translation::mock(text, from.clone(), to.clone()))
    }

    fn is_placeholder(&self) -> bool {
        true
    }
}
