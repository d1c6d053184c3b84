use dioxus::prelude::*;

use crate::components::translator::{use_capabilities, use_demo_settings};
use crate::core::capabilities::CopyFeedback;
use crate::core::{platform, timing};

/// Copies `text` and shows `copied_label` for the configured acknowledgement
/// window. Clipboard failures are logged and leave the button unchanged.
#[component]
pub fn CopyButton(
    text: String,
    label: String,
    copied_label: String,
    #[props(default = "button button--ghost".to_string())] class: String,
) -> Element {
    let caps = use_capabilities();
    let ack_ms = timing::millis(use_demo_settings().copied_ack());
    let mut feedback = use_signal(CopyFeedback::default);

    let copied = feedback().is_copied();
    let shown = if copied { copied_label } else { label.clone() };

    rsx! {
        button {
            r#type: "button",
            class: "{class} copy-button",
            class: if copied { "copy-button--copied" },
            title: "{label}",
            onclick: move |_| {
                if !caps.copy_logged(&text) {
                    return;
                }
                let token = feedback.with_mut(|f| f.mark_copied());
                tracing::debug!(chars = text.chars().count(), "copied to clipboard");
                platform::spawn_future(async move {
                    timing::sleep_ms(ack_ms).await;
                    feedback.with_mut(|f| f.reset(token));
                });
            },
            if copied { "✓ " } else { "⧉ " }
            "{shown}"
        }
    }
}
