//! The translator demo widget.
//!
//! UI events are funneled into a coroutine that owns the request lifecycle:
//! it starts requests through [`TranslatorState::begin_request`], runs them
//! on the injected [`TranslationBackend`](crate::core::backend::TranslationBackend) in a spawned task and settles them
//! with [`TranslatorState::complete`]. Cancel and swap abort the running task.

mod analysis;
mod header;
mod input;
mod language_selector;
mod output;

use std::cell::RefCell;
use std::rc::Rc;

use api::contract::TranslateResponse;
use api::{TranslateError, Translation};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::backend::{BackendHandle, MockBackend};
use crate::core::capabilities::Capabilities;
use crate::core::controller::{PendingRequest, TranslatorState};
use crate::core::platform;
use crate::core::settings::{self, DemoSettings};
use crate::views::use_lang_marker;

pub use analysis::AnalysisPanel;
pub use header::TranslatorHeader;
pub use input::TranslatorInput;
pub use language_selector::LanguageSelector;
pub use output::TranslatorOutput;

/// Events handled by the widget's request loop.
#[derive(Debug, Clone)]
pub enum TranslatorEvent {
    Submit,
    Cancel,
    Swap,
    Settled {
        id: u64,
        outcome: Result<Translation, TranslateError>,
    },
}

/// Settings from the context, or loaded once for this widget.
pub(crate) fn use_demo_settings() -> DemoSettings {
    use_hook(|| try_consume_context::<DemoSettings>().unwrap_or_else(settings::load_settings))
}

/// Capabilities from the context, or the system implementations.
pub(crate) fn use_capabilities() -> Capabilities {
    use_hook(|| try_consume_context::<Capabilities>().unwrap_or_else(Capabilities::system))
}

/// Backend from the context, or a mock built from `settings`.
pub(crate) fn use_backend(settings: &DemoSettings) -> BackendHandle {
    use_hook(|| {
        try_consume_context::<BackendHandle>()
            .unwrap_or_else(|| Rc::new(MockBackend::from_settings(settings)) as BackendHandle)
    })
}

/// Controller state plus the channel into its request loop.
#[derive(Clone, Copy)]
pub struct TranslatorHandle {
    pub state: Signal<TranslatorState>,
    pub events: Coroutine<TranslatorEvent>,
}

/// Owns the request lifecycle for one widget. At most one backend call runs
/// at a time; `Cancel` and `Swap` cancel it, and `Settled` for a request
/// that is no longer loading is dropped.
pub fn use_translator(backend: BackendHandle, settings: &DemoSettings) -> TranslatorHandle {
    let state = use_signal(|| TranslatorState::from_settings(settings));

    let sender_slot: Rc<RefCell<Option<UnboundedSender<TranslatorEvent>>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    let sender_for_loop = sender_slot.clone();

    let events = use_coroutine(move |mut rx: UnboundedReceiver<TranslatorEvent>| {
        let sender_slot = sender_for_loop.clone();
        let backend = backend.clone();
        let mut state = state;

        async move {
            let mut in_flight: Option<Task> = None;

            while let Some(event) = rx.next().await {
                match event {
                    TranslatorEvent::Submit => {
                        let Some(request) = state.with_mut(|s| s.begin_request()) else {
                            continue;
                        };
                        tracing::info!(
                            request_id = request.id,
                            from = %request.from,
                            to = %request.to,
                            chars = request.text.chars().count(),
                            "translation requested"
                        );
                        in_flight = Some(run_request(
                            backend.clone(),
                            sender_slot.clone(),
                            request,
                        ));
                    }
                    TranslatorEvent::Cancel => {
                        if let Some(task) = in_flight.take() {
                            task.cancel();
                        }
                        if let Some(id) = state.with_mut(|s| s.cancel()) {
                            tracing::info!(request_id = id, "translation cancelled");
                        }
                    }
                    TranslatorEvent::Swap => {
                        if let Some(task) = in_flight.take() {
                            task.cancel();
                        }
                        state.with_mut(|s| s.swap_languages());
                        let (from, to) = state.with(|s| (s.source.clone(), s.target.clone()));
                        tracing::debug!(%from, %to, "languages swapped");
                    }
                    TranslatorEvent::Settled { id, outcome } => {
                        if let Err(err) = &outcome {
                            tracing::warn!(request_id = id, code = ?err.code(), %err, "translation failed");
                        }
                        if state.with_mut(|s| s.complete(id, outcome)) {
                            in_flight = None;
                            tracing::info!(request_id = id, "translation settled");
                        } else {
                            tracing::debug!(request_id = id, "dropping stale completion");
                        }
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(events.tx());

    TranslatorHandle { state, events }
}

/// JSON preview of the settled result. Recomputed only when the result
/// changes, since each render of the response mints a fresh `request_id`.
pub fn use_response_preview(state: Signal<TranslatorState>) -> Memo<Option<String>> {
    let result = use_memo(move || state.read().result.clone());
    use_memo(move || result.read().as_ref().and_then(response_preview))
}

#[component]
pub fn TranslatorApp() -> Element {
    let lang_marker = use_lang_marker();
    let settings = use_demo_settings();
    let caps = use_capabilities();
    let backend = use_backend(&settings);
    let demo = backend.is_placeholder();
    let TranslatorHandle { state, events } = use_translator(backend, &settings);

    let preview = use_response_preview(state);

    let analyzed = state.read().result.as_ref().and_then(|r| {
        let analysis = r.analysis.clone()?;
        Some((analysis, r.text.clone(), r.from.as_str().to_string()))
    });

    rsx! {
        div { class: "translator",
            // Keyed on the UI locale so memoized children pick up new labels.
            for locale in std::iter::once(lang_marker) {
                div { key: "{locale}", class: "translator__body",
                    TranslatorHeader {}
                    div { class: "translator__card",
                        LanguageSelector {
                            state,
                            on_swap: move |_| events.send(TranslatorEvent::Swap),
                        }
                        div { class: "translator__panes",
                            TranslatorInput {
                                state,
                                caps: caps.clone(),
                                on_submit: move |_| events.send(TranslatorEvent::Submit),
                                on_cancel: move |_| events.send(TranslatorEvent::Cancel),
                            }
                            TranslatorOutput {
                                state,
                                caps: caps.clone(),
                                demo,
                            }
                        }
                    }
                    if let Some((analysis, text, lang)) = analyzed.clone() {
                        AnalysisPanel { analysis, text, lang, caps: caps.clone() }
                    }
                    if let Some(json) = preview() {
                        details { class: "translator__response",
                            summary { {crate::t!("translator-response-title")} }
                            pre { code { "{json}" } }
                        }
                    }
                }
            }
        }
    }
}

fn run_request(
    backend: BackendHandle,
    sender_slot: Rc<RefCell<Option<UnboundedSender<TranslatorEvent>>>>,
    request: PendingRequest,
) -> Task {
    platform::spawn_future(async move {
        let outcome = backend
            .translate(&request.text, &request.from, &request.to)
            .await;
        if let Some(sender) = sender_slot.borrow().as_ref() {
            let _ = sender.unbounded_send(TranslatorEvent::Settled {
                id: request.id,
                outcome,
            });
        }
    })
}

/// Pretty JSON of the `POST /v1/translate` response for `translation`.
fn response_preview(translation: &Translation) -> Option<String> {
    let response = TranslateResponse::from_translation(translation, 1);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => Some(json),
        Err(err) => {
            tracing::warn!(%err, "unable to render response preview");
            None
        }
    }
}
