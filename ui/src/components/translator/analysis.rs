use api::{Analysis, Grammar, Idiom};
use dioxus::prelude::*;

use crate::core::capabilities::Capabilities;
use crate::t;

/// Word or sentence breakdown attached to the current result. `text` and
/// `lang` are the analyzed source text and its language.
#[component]
pub fn AnalysisPanel(analysis: Analysis, text: String, lang: String, caps: Capabilities) -> Element {
    match analysis {
        Analysis::Word {
            part_of_speech,
            pronunciation,
            synonyms,
            antonyms,
            examples,
        } => rsx! {
            section { class: "analysis analysis--word",
                h3 { class: "analysis__title", "📖 " {t!("analysis-word-title")} }
                div { class: "analysis__grid",
                    div { class: "analysis__cell",
                        h4 { {t!("analysis-part-of-speech")} }
                        span { class: "tag tag--accent", "{part_of_speech}" }
                        div { class: "analysis__pronunciation",
                            span { "{pronunciation}" }
                            SpeakButton {
                                text: text.clone(),
                                lang: lang.clone(),
                                caps: caps.clone(),
                                title: t!("analysis-speak-word"),
                            }
                        }
                    }
                    if !synonyms.is_empty() {
                        TagList { title: t!("analysis-synonyms"), items: synonyms, tone: "positive" }
                    }
                    if !antonyms.is_empty() {
                        TagList { title: t!("analysis-antonyms"), items: antonyms, tone: "negative" }
                    }
                }
                if !examples.is_empty() {
                    div { class: "analysis__examples",
                        h4 { {t!("analysis-examples")} }
                        ul {
                            for (i, example) in examples.into_iter().enumerate() {
                                li { key: "{i}", class: "analysis__example",
                                    span { "\"{example}\"" }
                                    SpeakButton {
                                        text: example,
                                        lang: lang.clone(),
                                        caps: caps.clone(),
                                        title: t!("translator-speak"),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        Analysis::Sentence {
            tense,
            grammar,
            idioms,
        } => rsx! {
            section { class: "analysis analysis--sentence",
                h3 { class: "analysis__title", "🧠 " {t!("analysis-grammar-title")} }
                div { class: "analysis__grid",
                    div { class: "analysis__cell",
                        h4 { {t!("analysis-tense")} }
                        span { class: "tag tag--accent", "{tense}" }
                    }
                    GrammarBreakdown { grammar }
                }
                if !idioms.is_empty() {
                    IdiomList { idioms }
                }
            }
        },
    }
}

#[component]
fn TagList(title: String, items: Vec<String>, tone: &'static str) -> Element {
    rsx! {
        div { class: "analysis__cell",
            h4 { "{title}" }
            div { class: "analysis__tags",
                for item in items {
                    span { key: "{item}", class: "tag tag--{tone}", "{item}" }
                }
            }
        }
    }
}

#[component]
fn SpeakButton(text: String, lang: String, caps: Capabilities, title: String) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "translator__icon-button",
            title: "{title}",
            onclick: move |_| caps.speak_logged(&text, &lang),
            "🔊"
        }
    }
}

#[component]
fn GrammarBreakdown(grammar: Grammar) -> Element {
    let rows = [
        (t!("analysis-subject"), grammar.subject),
        (t!("analysis-verb"), grammar.verb),
        (t!("analysis-object"), grammar.object),
        (
            t!("analysis-modifiers"),
            grammar.modifiers.map(|m| m.join(", ")),
        ),
    ];

    rsx! {
        div { class: "analysis__cell",
            h4 { {t!("analysis-structure")} }
            dl { class: "analysis__structure",
                for (label, value) in rows.into_iter().filter_map(|(l, v)| v.map(|v| (l, v))) {
                    div { key: "{label}", class: "analysis__structure-row",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        }
    }
}

#[component]
fn IdiomList(idioms: Vec<Idiom>) -> Element {
    rsx! {
        div { class: "analysis__idioms",
            h4 { "💡 " {t!("analysis-idioms-title")} }
            for idiom in idioms {
                div { key: "{idiom.phrase}", class: "analysis__idiom",
                    div { class: "analysis__idiom-head",
                        strong { "\"{idiom.phrase}\"" }
                        span { class: "tag tag--neutral", {t!("analysis-idiom-badge")} }
                    }
                    p { "{idiom.meaning}" }
                }
            }
        }
    }
}
