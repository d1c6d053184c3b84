use dioxus::prelude::*;

use crate::components::translator::TranslatorApp;
use crate::views::use_lang_marker;

#[component]
pub fn Translator() -> Element {
    let lang_marker = use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-translator",
            TranslatorApp {}
        }
    }
}
