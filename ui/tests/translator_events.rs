//! Runs the widget's request loop inside a VirtualDom against a backend that
//! counts started and finished calls, so task cancellation is observable.

mod support;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use api::{LanguageCode, TranslateError, Translation, MOCK_TRANSLATION};
use async_trait::async_trait;
use dioxus::prelude::*;
use ui::components::translator::{
    use_response_preview, use_translator, TranslatorEvent, TranslatorHandle,
};
use ui::core::backend::{BackendHandle, TranslationBackend};
use ui::core::controller::{Phase, TranslatorState};
use ui::core::settings::DemoSettings;
use ui::core::timing::sleep_ms;

use support::run_for;

#[derive(Default)]
struct CountingBackend {
    latency_ms: u64,
    reject: bool,
    started: Cell<u32>,
    finished: Cell<u32>,
}

#[async_trait(?Send)]
impl TranslationBackend for CountingBackend {
    async fn translate(
        &self,
        text: &str,
        from: &LanguageCode,
        to: &LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.started.set(self.started.get() + 1);
        sleep_ms(self.latency_ms).await;
        self.finished.set(self.finished.get() + 1);
        if self.reject {
            return Err(TranslateError::unsupported(to.as_str()));
        }
        Ok(Translation::mock(text, from.clone(), to.clone()))
    }
}

#[derive(Clone, Default)]
struct HandleSlot(Rc<RefCell<Option<(TranslatorHandle, Memo<Option<String>>)>>>);

#[component]
fn Widget() -> Element {
    let backend = use_hook(consume_context::<BackendHandle>);
    let handle = use_translator(backend, &DemoSettings::default());
    let preview = use_response_preview(handle.state);
    use_hook(|| consume_context::<HandleSlot>().0.replace(Some((handle, preview))));
    rsx! {}
}

struct Harness {
    dom: VirtualDom,
    backend: Rc<CountingBackend>,
    handle: TranslatorHandle,
    preview: Memo<Option<String>>,
}

impl Harness {
    fn new(latency_ms: u64) -> Self {
        Self::with_backend(CountingBackend {
            latency_ms,
            ..Default::default()
        })
    }

    fn with_backend(backend: CountingBackend) -> Self {
        let backend = Rc::new(backend);
        let slot = HandleSlot::default();
        let mut dom = VirtualDom::new(Widget)
            .with_root_context(backend.clone() as BackendHandle)
            .with_root_context(slot.clone());
        dom.rebuild_in_place();
        let (handle, preview) = (*slot.0.borrow()).expect("widget registered its handle");
        Self {
            dom,
            backend,
            handle,
            preview,
        }
    }

    fn send(&self, event: TranslatorEvent) {
        self.dom.in_runtime(|| self.handle.events.send(event));
    }

    fn edit(&self, f: impl FnOnce(&mut TranslatorState)) {
        let mut state = self.handle.state;
        self.dom.in_runtime(|| state.with_mut(f));
    }

    fn state(&self) -> TranslatorState {
        self.dom.in_runtime(|| self.handle.state.peek().clone())
    }

    fn preview(&self) -> Option<String> {
        self.dom.in_runtime(|| self.preview.read().clone())
    }

    async fn run_for(&mut self, ms: u64) {
        run_for(&mut self.dom, Duration::from_millis(ms)).await;
    }
}

#[tokio::test]
async fn submit_settles_through_the_loop() {
    let mut h = Harness::new(10);
    h.edit(|s| s.set_input("Hello"));

    h.send(TranslatorEvent::Submit);
    h.send(TranslatorEvent::Submit);
    h.run_for(200).await;

    let state = h.state();
    assert!(!state.is_loading());
    let result = state.result.expect("result stored");
    assert_eq!(result.translation, MOCK_TRANSLATION);
    assert_eq!(h.backend.started.get(), 1, "second submit while loading is ignored");
    assert_eq!(h.backend.finished.get(), 1);
}

#[tokio::test]
async fn preview_is_stable_while_typing() {
    let mut h = Harness::new(0);
    h.edit(|s| s.set_input("Hello"));
    h.send(TranslatorEvent::Submit);
    h.run_for(50).await;

    let first = h.preview().expect("preview after a result");
    assert!(first.contains("\"request_id\""));

    h.edit(|s| s.set_input("Hello w"));
    h.run_for(20).await;
    h.edit(|s| s.set_input("Hello wo"));
    h.run_for(20).await;
    assert_eq!(h.preview().as_deref(), Some(first.as_str()));
}

#[tokio::test]
async fn cancel_aborts_the_running_call() {
    let mut h = Harness::new(200);
    h.edit(|s| s.set_input("Hello there"));

    h.send(TranslatorEvent::Submit);
    h.run_for(30).await;
    assert!(h.state().is_loading());
    assert_eq!(h.backend.started.get(), 1);

    h.send(TranslatorEvent::Cancel);
    h.run_for(350).await;

    let state = h.state();
    assert!(!state.is_loading());
    assert!(state.result.is_none());
    assert!(state.status.is_none());
    assert_eq!(h.backend.finished.get(), 0, "backend call kept running after cancel");
}

#[tokio::test]
async fn swap_abandons_the_call_and_drops_its_settlement() {
    let mut h = Harness::new(200);
    h.edit(|s| s.set_input("Hello"));

    h.send(TranslatorEvent::Submit);
    h.run_for(30).await;
    let Phase::Loading { request_id } = h.state().phase else {
        panic!("request did not start");
    };

    h.send(TranslatorEvent::Swap);
    h.run_for(30).await;
    let swapped = h.state();
    assert_eq!((swapped.source.as_str(), swapped.target.as_str()), ("es", "en"));
    assert!(!swapped.is_loading());
    assert!(swapped.input.is_empty());

    let late = Translation::mock("Hello", LanguageCode::from("en"), LanguageCode::from("es"));
    h.send(TranslatorEvent::Settled {
        id: request_id,
        outcome: Ok(late),
    });
    h.run_for(300).await;

    let state = h.state();
    assert!(state.result.is_none(), "stale completion was applied");
    assert_eq!(h.backend.finished.get(), 0);
}

#[tokio::test]
async fn backend_error_settles_as_status() {
    let mut h = Harness::with_backend(CountingBackend {
        reject: true,
        ..Default::default()
    });
    h.edit(|s| {
        s.change_target("tlh");
        s.set_input("Hello");
    });

    h.send(TranslatorEvent::Submit);
    h.run_for(50).await;

    let state = h.state();
    assert!(!state.is_loading());
    assert!(state.result.is_none());
    assert_eq!(state.status, Some(TranslateError::unsupported("tlh")));
}
