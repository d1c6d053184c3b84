//! State machine behind the translator widget.
//!
//! The component owns a `TranslatorState` in a signal. A submission produces a
//! [`PendingRequest`] that the caller runs against a backend and feeds back
//! through [`TranslatorState::complete`]. Request ids make late completions
//! (after cancel, swap or a newer request) harmless.

use api::{LanguageCode, Translation, TranslateError};

use super::settings::DemoSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading { request_id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: u64,
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorState {
    pub input: String,
    pub source: LanguageCode,
    pub target: LanguageCode,
    pub result: Option<Translation>,
    pub status: Option<TranslateError>,
    pub phase: Phase,
    next_request_id: u64,
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self::new(LanguageCode::from("en"), LanguageCode::from("es"))
    }
}

impl TranslatorState {
    pub fn new(source: LanguageCode, target: LanguageCode) -> Self {
        Self {
            input: String::new(),
            source,
            target,
            result: None,
            status: None,
            phase: Phase::Idle,
            next_request_id: 1,
        }
    }

    pub fn from_settings(settings: &DemoSettings) -> Self {
        Self::new(
            LanguageCode::from(settings.default_source.as_str()),
            LanguageCode::from(settings.default_target.as_str()),
        )
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }

    pub fn input_char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn change_source(&mut self, code: impl Into<LanguageCode>) {
        self.source = code.into();
    }

    pub fn change_target(&mut self, code: impl Into<LanguageCode>) {
        self.target = code.into();
    }

    /// Start a request for the current input.
    ///
    /// Returns `None` without touching state when the input is blank or a
    /// request is already loading.
    pub fn begin_request(&mut self) -> Option<PendingRequest> {
        if !self.can_submit() {
            return None;
        }

        let id = self.next_request_id;
        self.next_request_id += 1;
        self.phase = Phase::Loading { request_id: id };
        self.status = None;

        Some(PendingRequest {
            id,
            text: self.input.clone(),
            from: self.source.clone(),
            to: self.target.clone(),
        })
    }

    /// Settle request `id`. Returns `false` if it is no longer the active one.
    pub fn complete(&mut self, id: u64, outcome: Result<Translation, TranslateError>) -> bool {
        if self.phase != (Phase::Loading { request_id: id }) {
            return false;
        }

        self.phase = Phase::Idle;
        match outcome {
            Ok(translation) => {
                self.result = Some(translation);
                self.status = None;
            }
            Err(err) => {
                self.result = None;
                self.status = Some(err);
            }
        }
        true
    }

    /// Abandon the in-flight request, if any. Returns its id.
    pub fn cancel(&mut self) -> Option<u64> {
        match self.phase {
            Phase::Loading { request_id } => {
                self.phase = Phase::Idle;
                Some(request_id)
            }
            Phase::Idle => None,
        }
    }

    /// Exchange the language pair and clear input, result and status.
    /// Any in-flight request is abandoned.
    pub fn swap_languages(&mut self) {
        self.cancel();
        std::mem::swap(&mut self.source, &mut self.target);
        self.input.clear();
        self.result = None;
        self.status = None;
    }
}
