//! Shared data shapes for TranslatePro: the translation record, the language
//! catalog, the error taxonomy and the documented REST contract.
//!
//! Nothing here performs I/O. The `ui` crate drives these types from its
//! controller; a real backend would serialize the `contract` types on the wire.

pub mod contract;
pub mod error;
pub mod language;
pub mod translation;

pub use error::{ErrorCode, TranslateError};
pub use language::{display_name, Language, LanguageCode, LANGUAGES};
pub use translation::{Analysis, AnalysisKind, Grammar, Idiom, Translation, MOCK_TRANSLATION};
