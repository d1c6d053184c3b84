use api::{LanguageCode, LANGUAGES};
use dioxus::prelude::*;

use crate::core::controller::TranslatorState;
use crate::t;

/// Source and target pickers over the fixed catalog, with the swap button
/// between them.
#[component]
pub fn LanguageSelector(state: Signal<TranslatorState>, on_swap: EventHandler<MouseEvent>) -> Element {
    let mut state = state;
    let snapshot = state();
    let source = snapshot.source.as_str().to_string();
    let target = snapshot.target.as_str().to_string();

    rsx! {
        div { class: "translator__languages",
            LanguagePicker {
                id: "translator-source",
                label: t!("translator-from"),
                selected: source,
                on_change: move |code: String| state.with_mut(|s| s.change_source(code)),
            }
            button {
                r#type: "button",
                class: "translator__swap",
                title: t!("translator-swap"),
                aria_label: t!("translator-swap"),
                onclick: move |evt| on_swap.call(evt),
                "⇄"
            }
            LanguagePicker {
                id: "translator-target",
                label: t!("translator-to"),
                selected: target,
                on_change: move |code: String| state.with_mut(|s| s.change_target(code)),
            }
        }
    }
}

#[component]
fn LanguagePicker(
    id: &'static str,
    label: String,
    selected: String,
    on_change: EventHandler<String>,
) -> Element {
    // An unknown code stays selectable so the control reflects the state.
    let unknown = !LanguageCode::from(selected.as_str()).is_supported();

    rsx! {
        div { class: "translator__picker",
            label { r#for: id, class: "translator__picker-label", "{label}" }
            select {
                id: id,
                class: "translator__select",
                value: "{selected}",
                onchange: move |evt: FormEvent| on_change.call(evt.value()),
                if unknown {
                    option { value: "{selected}", "{selected}" }
                }
                for lang in LANGUAGES.iter() {
                    option {
                        key: "{lang.code}",
                        value: lang.code,
                        selected: lang.code == selected,
                        "{lang.label()}"
                    }
                }
            }
        }
    }
}
