//! Fixed language catalog used by every language picker.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A language code as selected in the UI. Any string is storable; only
/// [`LanguageCode::is_supported`] consults the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_supported(&self) -> bool {
        Language::find(&self.0).is_some()
    }

    pub fn language(&self) -> Option<&'static Language> {
        Language::find(&self.0)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LanguageCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

impl Language {
    pub fn find(code: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|lang| lang.code == code)
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.flag, self.name)
    }
}

pub static LANGUAGES: [Language; 12] = [
    Language { code: "en", name: "English", flag: "🇺🇸" },
    Language { code: "es", name: "Spanish", flag: "🇪🇸" },
    Language { code: "fr", name: "French", flag: "🇫🇷" },
    Language { code: "de", name: "German", flag: "🇩🇪" },
    Language { code: "it", name: "Italian", flag: "🇮🇹" },
    Language { code: "pt", name: "Portuguese", flag: "🇵🇹" },
    Language { code: "ru", name: "Russian", flag: "🇷🇺" },
    Language { code: "ja", name: "Japanese", flag: "🇯🇵" },
    Language { code: "ko", name: "Korean", flag: "🇰🇷" },
    Language { code: "zh", name: "Chinese", flag: "🇨🇳" },
    Language { code: "ar", name: "Arabic", flag: "🇸🇦" },
    Language { code: "hi", name: "Hindi", flag: "🇮🇳" },
];

/// `"<flag> <name>"` for catalog codes, the raw code otherwise.
pub fn display_name(code: &str) -> String {
    Language::find(code)
        .map(Language::label)
        .unwrap_or_else(|| code.to_string())
}
