//! Platform capabilities used by the translator: clipboard copy and speech.
//!
//! Both are injected behind traits so components can be driven by fakes.
//! Callers log failures and never surface them to the user.

use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("capability unavailable on this platform")]
    Unavailable,
    #[error("permission denied: {0}")]
    Denied(String),
    #[error("{0}")]
    Failed(String),
}

pub trait Clipboard {
    fn copy_text(&self, text: &str) -> Result<(), CapabilityError>;
}

pub trait SpeechSynthesizer {
    /// Fire-and-forget playback of `text` in language `lang`.
    fn speak(&self, text: &str, lang: &str) -> Result<(), CapabilityError>;
}

/// Capabilities handed to components through the Dioxus context.
#[derive(Clone)]
pub struct Capabilities {
    pub clipboard: Rc<dyn Clipboard>,
    pub speech: Rc<dyn SpeechSynthesizer>,
}

impl Capabilities {
    pub fn system() -> Self {
        Self {
            clipboard: Rc::new(SystemClipboard),
            speech: Rc::new(SystemSpeech),
        }
    }

    /// Copy `text`, logging instead of returning the failure.
    pub fn copy_logged(&self, text: &str) -> bool {
        match self.clipboard.copy_text(text) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "clipboard copy failed");
                false
            }
        }
    }

    /// Speak `text`, logging instead of returning the failure.
    pub fn speak_logged(&self, text: &str, lang: &str) {
        if text.trim().is_empty() {
            return;
        }
        if let Err(err) = self.speech.speak(text, lang) {
            tracing::warn!(%err, lang, "speech synthesis failed");
        }
    }
}

impl PartialEq for Capabilities {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.clipboard, &other.clipboard) && Rc::ptr_eq(&self.speech, &other.speech)
    }
}

pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy_text(&self, text: &str) -> Result<(), CapabilityError> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let window = web_sys::window().ok_or(CapabilityError::Unavailable)?;
            let document = window.document().ok_or(CapabilityError::Unavailable)?;
            let body = document.body().ok_or(CapabilityError::Unavailable)?;

            let textarea = document
                .create_element("textarea")
                .map_err(|_| CapabilityError::Failed("unable to create textarea".into()))?
                .dyn_into::<web_sys::HtmlTextAreaElement>()
                .map_err(|_| CapabilityError::Failed("textarea cast failed".into()))?;
            textarea.set_value(text);
            let style = textarea.style();
            style.set_property("position", "fixed").ok();
            style.set_property("top", "0").ok();
            style.set_property("opacity", "0").ok();

            body.append_child(&textarea).ok();
            textarea.select();
            let copied = document.exec_command("copy").unwrap_or(false);
            textarea.remove();
            if copied {
                Ok(())
            } else {
                Err(CapabilityError::Denied("clipboard copy blocked".into()))
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|err| CapabilityError::Failed(err.to_string()))?;
            clipboard
                .set_text(text.to_string())
                .map_err(|err| CapabilityError::Failed(err.to_string()))
        }
    }
}

pub struct SystemSpeech;

impl SpeechSynthesizer for SystemSpeech {
    fn speak(&self, text: &str, lang: &str) -> Result<(), CapabilityError> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or(CapabilityError::Unavailable)?;
            let synth = window
                .speech_synthesis()
                .map_err(|_| CapabilityError::Unavailable)?;
            let utterance = web_sys::SpeechSynthesisUtterance::new_with_text(text)
                .map_err(|_| CapabilityError::Failed("unable to create utterance".into()))?;
            utterance.set_lang(lang);
            synth.speak(&utterance);
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (text, lang);
            Err(CapabilityError::Unavailable)
        }
    }
}

/// Transient "copied" acknowledgement. Each copy gets a token so a reset
/// scheduled by an older copy cannot clear a newer acknowledgement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    token: u64,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn mark_copied(&mut self) -> u64 {
        self.token += 1;
        self.copied = true;
        self.token
    }

    pub fn reset(&mut self, token: u64) {
        if self.token == token {
            self.copied = false;
        }
    }
}
