use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire codes for the documented error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidInput,
    UnsupportedLanguage,
    BackendUnavailable,
    RateLimited,
}

/// Failures at the translation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("enter some text to translate")]
    InvalidInput,
    #[error("language '{code}' is not supported")]
    UnsupportedLanguage { code: String },
    #[error("translation service unavailable: {reason}")]
    BackendUnavailable { reason: String },
    #[error("rate limit reached{}", retry_hint(.retry_after_secs))]
    RateLimited { retry_after_secs: Option<u64> },
}

impl TranslateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput => ErrorCode::InvalidInput,
            Self::UnsupportedLanguage { .. } => ErrorCode::UnsupportedLanguage,
            Self::BackendUnavailable { .. } => ErrorCode::BackendUnavailable,
            Self::RateLimited { .. } => ErrorCode::RateLimited,
        }
    }

    pub fn unsupported(code: impl Into<String>) -> Self {
        Self::UnsupportedLanguage { code: code.into() }
    }
}

fn retry_hint(retry_after_secs: &Option<u64>) -> String {
    match retry_after_secs {
        Some(secs) => format!(", retry in {secs}s"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            TranslateError::unsupported("xx").to_string(),
            "language 'xx' is not supported"
        );
        assert_eq!(
            TranslateError::RateLimited {
                retry_after_secs: Some(30)
            }
            .to_string(),
            "rate limit reached, retry in 30s"
        );
        assert_eq!(
            TranslateError::RateLimited {
                retry_after_secs: None
            }
            .to_string(),
            "rate limit reached"
        );
    }

    #[test]
    fn codes_serialize_snake_case() {
        let code = TranslateError::BackendUnavailable {
            reason: "timeout".into(),
        }
        .code();
        assert_eq!(
            serde_json::to_string(&code).expect("serialize"),
            "\"backend_unavailable\""
        );
    }
}
