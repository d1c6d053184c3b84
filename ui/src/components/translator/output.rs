use dioxus::prelude::*;

use crate::components::CopyButton;
use crate::core::capabilities::Capabilities;
use crate::core::controller::TranslatorState;
use crate::core::format;
use crate::t;

#[component]
pub fn TranslatorOutput(state: Signal<TranslatorState>, caps: Capabilities, demo: bool) -> Element {
    let snapshot = state();

    let body = if snapshot.is_loading() {
        rsx! {
            div { class: "translator__loading", role: "status",
                span { class: "spinner" }
                p { {t!("translator-loading")} }
            }
        }
    } else if let Some(result) = snapshot.result.clone() {
        let words = format::format_words_translated(result.word_count());
        let direction = result.direction_label();
        let pronunciation = result.pronunciation().map(str::to_string);
        let speak_caps = caps.clone();
        let spoken = result.translation.clone();
        let lang = result.to.as_str().to_string();

        rsx! {
            div { class: "translator__result",
                p { class: "translator__translation", "{result.translation}" }
                if let Some(pron) = pronunciation {
                    p { class: "translator__pronunciation",
                        span { class: "translator__pronunciation-label", {t!("translator-pronunciation")} }
                        " {pron}"
                    }
                }
                div { class: "translator__result-actions",
                    CopyButton {
                        text: result.translation.clone(),
                        label: t!("translator-copy"),
                        copied_label: t!("translator-copied"),
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| speak_caps.speak_logged(&spoken, &lang),
                        "🔊 "
                        {t!("translator-speak")}
                    }
                }
                div { class: "translator__result-footer",
                    span { "{words}" }
                    span { class: "translator__direction", "{direction}" }
                }
                if demo {
                    p { class: "translator__demo-note", {t!("translator-demo-note")} }
                }
            }
        }
    } else {
        rsx! {
            div { class: "translator__empty",
                span { class: "translator__empty-mark", "💬" }
                p { {t!("translator-empty")} }
            }
        }
    };

    rsx! {
        div { class: "translator__pane translator__pane--output",
            div { class: "translator__pane-header",
                h3 { {t!("translator-output")} }
            }
            {body}
            if let Some(err) = snapshot.status.as_ref() {
                div {
                    class: "translator__status translator__status--error",
                    role: "alert",
                    "⚠️ {err}"
                }
            }
        }
    }
}
