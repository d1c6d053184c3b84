use dioxus::prelude::*;

use crate::core::capabilities::Capabilities;
use crate::core::controller::TranslatorState;
use crate::core::format;
use crate::t;

#[component]
pub fn TranslatorInput(
    state: Signal<TranslatorState>,
    caps: Capabilities,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut state = state;
    let snapshot = state();
    let loading = snapshot.is_loading();
    let can_submit = snapshot.can_submit();
    let char_count = format::format_char_count(snapshot.input_char_count());
    let has_text = !snapshot.input.trim().is_empty();
    let speak_caps = caps.clone();

    rsx! {
        div { class: "translator__pane translator__pane--input",
            div { class: "translator__pane-header",
                h3 { {t!("translator-original")} }
                button {
                    r#type: "button",
                    class: "translator__icon-button",
                    title: t!("translator-speak"),
                    disabled: !has_text,
                    onclick: move |_| {
                        let s = state.read();
                        speak_caps.speak_logged(&s.input, s.source.as_str());
                    },
                    "🔊"
                }
            }
            textarea {
                class: "translator__textarea",
                placeholder: t!("translator-placeholder"),
                value: "{snapshot.input}",
                oninput: move |evt: FormEvent| state.with_mut(|s| s.set_input(evt.value())),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
                        evt.prevent_default();
                        on_submit.call(());
                    }
                },
            }
            div { class: "translator__pane-footer",
                span { class: "translator__char-count", "{char_count}" }
                if loading {
                    button {
                        r#type: "button",
                        class: "button button--ghost translator__cancel",
                        onclick: move |_| on_cancel.call(()),
                        {t!("translator-cancel")}
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--primary translator__submit",
                    disabled: !can_submit,
                    onclick: move |_| on_submit.call(()),
                    if loading {
                        span { class: "spinner spinner--small" }
                    }
                    {t!("translator-submit")}
                }
            }
            p { class: "translator__hint", {t!("translator-hint")} }
        }
    }
}
