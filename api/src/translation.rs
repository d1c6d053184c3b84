//! The translation record and its optional analysis.
//!
//! The analysis content produced by [`Analysis::canned`] is a placeholder that
//! stands in for a real linguistic backend. It does not depend on the input
//! text beyond choosing between the word and sentence shapes.

use serde::{Deserialize, Serialize};

use crate::language::LanguageCode;

/// Output string of the mock backend, returned for every input and language pair.
pub const MOCK_TRANSLATION: &str = "Hola, ¿cómo estás?";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl Translation {
    /// Canned result for `text`, as served by the mock backend.
    pub fn mock(text: impl Into<String>, from: LanguageCode, to: LanguageCode) -> Self {
        let text = text.into();
        let analysis = Analysis::canned(AnalysisKind::for_text(&text));
        Self {
            text,
            from,
            to,
            translation: MOCK_TRANSLATION.to_string(),
            analysis: Some(analysis),
        }
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// `"EN → ES"`.
    pub fn direction_label(&self) -> String {
        format!(
            "{} → {}",
            self.from.as_str().to_uppercase(),
            self.to.as_str().to_uppercase()
        )
    }

    pub fn pronunciation(&self) -> Option<&str> {
        match &self.analysis {
            Some(Analysis::Word { pronunciation, .. }) => Some(pronunciation.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Word,
    Sentence,
}

impl AnalysisKind {
    /// `Word` when the trimmed text is exactly one whitespace-delimited token.
    pub fn for_text(text: &str) -> Self {
        let mut tokens = text.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(_), None) => Self::Word,
            _ => Self::Sentence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Analysis {
    #[serde(rename_all = "camelCase")]
    Word {
        part_of_speech: String,
        pronunciation: String,
        synonyms: Vec<String>,
        antonyms: Vec<String>,
        examples: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Sentence {
        tense: String,
        grammar: Grammar,
        idioms: Vec<Idiom>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idiom {
    pub phrase: String,
    pub meaning: String,
}

impl Analysis {
    pub fn kind(&self) -> AnalysisKind {
        match self {
            Self::Word { .. } => AnalysisKind::Word,
            Self::Sentence { .. } => AnalysisKind::Sentence,
        }
    }

    pub fn canned(kind: AnalysisKind) -> Self {
        match kind {
            AnalysisKind::Word => Self::Word {
                part_of_speech: "noun".into(),
                pronunciation: "/həˈloʊ/".into(),
                synonyms: strings(&["greeting", "salutation"]),
                antonyms: strings(&["goodbye", "farewell"]),
                examples: strings(&[
                    "Hello, how are you?",
                    "Say hello to your friends",
                    "A friendly hello",
                ]),
            },
            AnalysisKind::Sentence => Self::Sentence {
                tense: "present simple".into(),
                grammar: Grammar {
                    subject: Some("Hello".into()),
                    verb: Some("implied 'is'".into()),
                    object: Some("greeting".into()),
                    modifiers: Some(strings(&["informal"])),
                },
                idioms: vec![Idiom {
                    phrase: "how are you".into(),
                    meaning: "A common greeting asking about someone's wellbeing".into(),
                }],
            },
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_count_selects_analysis_kind() {
        assert_eq!(AnalysisKind::for_text("Hello"), AnalysisKind::Word);
        assert_eq!(AnalysisKind::for_text("  Hello \n"), AnalysisKind::Word);
        assert_eq!(AnalysisKind::for_text("Hello there"), AnalysisKind::Sentence);
        assert_eq!(AnalysisKind::for_text("Hello\tthere"), AnalysisKind::Sentence);
    }

    #[test]
    fn mock_word_payload() {
        let t = Translation::mock("Hello", "en".into(), "es".into());
        assert_eq!(t.translation, MOCK_TRANSLATION);
        match t.analysis {
            Some(Analysis::Word {
                part_of_speech,
                synonyms,
                ..
            }) => {
                assert_eq!(part_of_speech, "noun");
                assert_eq!(synonyms, vec!["greeting", "salutation"]);
            }
            other => panic!("expected word analysis, got {other:?}"),
        }
    }

    #[test]
    fn mock_sentence_payload_ignores_input() {
        let t = Translation::mock("Hello there friend", "en".into(), "es".into());
        match t.analysis {
            Some(Analysis::Sentence { tense, idioms, .. }) => {
                assert_eq!(tense, "present simple");
                assert_eq!(
                    idioms,
                    vec![Idiom {
                        phrase: "how are you".into(),
                        meaning: "A common greeting asking about someone's wellbeing".into(),
                    }]
                );
            }
            other => panic!("expected sentence analysis, got {other:?}"),
        }
    }

    #[test]
    fn analysis_serializes_with_type_tag_and_camel_case() {
        let json = serde_json::to_value(Analysis::canned(AnalysisKind::Word)).expect("serialize");
        assert_eq!(json["type"], "word");
        assert_eq!(json["partOfSpeech"], "noun");

        let json =
            serde_json::to_value(Analysis::canned(AnalysisKind::Sentence)).expect("serialize");
        assert_eq!(json["type"], "sentence");
        assert_eq!(json["grammar"]["modifiers"][0], "informal");
    }

    #[test]
    fn footer_helpers() {
        let t = Translation::mock("Hello there friend", "en".into(), "es".into());
        assert_eq!(t.word_count(), 3);
        assert_eq!(t.direction_label(), "EN → ES");
        assert!(t.pronunciation().is_none());
    }
}
