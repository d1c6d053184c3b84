//! Drives the translator state machine against the mock backend, the way the
//! widget's event loop does, without rendering anything.

use std::time::Duration;

use api::contract::{ApiErrorBody, TranslateResponse};
use api::{Analysis, AnalysisKind, ErrorCode, LanguageCode, TranslateError, MOCK_TRANSLATION};
use ui::core::backend::{MockBackend, TranslationBackend};
use ui::core::controller::TranslatorState;
use ui::core::settings::DemoSettings;

async fn submit(state: &mut TranslatorState, backend: &MockBackend) -> bool {
    let Some(request) = state.begin_request() else {
        return false;
    };
    assert!(state.is_loading());
    let outcome = backend
        .translate(&request.text, &request.from, &request.to)
        .await;
    state.complete(request.id, outcome)
}

fn instant_backend() -> MockBackend {
    MockBackend::new(Duration::ZERO)
}

#[tokio::test]
async fn hello_resolves_to_canned_word_analysis() {
    let backend = instant_backend();
    let mut state = TranslatorState::default();
    state.set_input("Hello");

    assert!(submit(&mut state, &backend).await);
    assert!(!state.is_loading());

    let result = state.result.clone().expect("result stored");
    assert_eq!(result.translation, MOCK_TRANSLATION);
    assert_eq!((result.from.as_str(), result.to.as_str()), ("en", "es"));
    match result.analysis {
        Some(Analysis::Word {
            part_of_speech,
            synonyms,
            ..
        }) => {
            assert_eq!(part_of_speech, "noun");
            assert_eq!(synonyms, ["greeting", "salutation"]);
        }
        other => panic!("expected word analysis, got {other:?}"),
    }
}

#[tokio::test]
async fn multi_word_input_resolves_to_sentence_analysis() {
    let backend = instant_backend();
    let mut state = TranslatorState::default();
    state.set_input("  Hello there friend  ");
    assert!(submit(&mut state, &backend).await);

    let analysis = state.result.and_then(|r| r.analysis).expect("analysis");
    assert_eq!(analysis.kind(), AnalysisKind::Sentence);
    let Analysis::Sentence { tense, idioms, .. } = analysis else {
        unreachable!();
    };
    assert_eq!(tense, "present simple");
    assert_eq!(idioms.len(), 1);
    assert_eq!(idioms[0].phrase, "how are you");
    assert_eq!(
        idioms[0].meaning,
        "A common greeting asking about someone's wellbeing"
    );
}

#[tokio::test]
async fn unsupported_target_surfaces_as_status() {
    let backend = instant_backend();
    let mut state = TranslatorState::default();
    state.change_target("tlh");
    state.set_input("Hello");

    assert!(submit(&mut state, &backend).await);
    assert!(state.result.is_none());
    let status = state.status.clone().expect("status set");
    assert_eq!(status, TranslateError::unsupported("tlh"));

    let body = ApiErrorBody::from(&status);
    assert!(!body.success);
    assert_eq!(body.error.code, ErrorCode::UnsupportedLanguage);
}

#[tokio::test]
async fn swap_then_translate_uses_the_new_direction() {
    let backend = instant_backend();
    let mut state = TranslatorState::default();
    state.set_input("Hello");
    assert!(submit(&mut state, &backend).await);

    state.swap_languages();
    assert!(state.input.is_empty());
    assert!(state.result.is_none());
    assert!(!submit(&mut state, &backend).await, "blank input is ignored");

    state.set_input("Hola");
    assert!(submit(&mut state, &backend).await);
    let result = state.result.expect("result");
    assert_eq!(result.direction_label(), "ES → EN");
}

#[tokio::test]
async fn response_preview_matches_the_documented_contract() {
    let backend = instant_backend();
    let translation = backend
        .translate(
            "Hello, how are you?",
            &LanguageCode::from("en"),
            &LanguageCode::from("es"),
        )
        .await
        .expect("translate");

    let response = TranslateResponse::from_translation(&translation, 1);
    let json = serde_json::to_value(&response).expect("serialize");
    assert_eq!(json["success"], true);
    assert_eq!(json["translation"], MOCK_TRANSLATION);
    assert_eq!(json["analysis"]["type"], "sentence");
    assert!(json["request_id"]
        .as_str()
        .is_some_and(|id| id.starts_with("req_")));
}

#[test]
fn settings_drive_initial_pair_and_latency() {
    let settings = DemoSettings::from_toml_str(
        "latency_ms = 10\ndefault_source = \"fr\"\ndefault_target = \"de\"",
    )
    .expect("parse");
    let state = TranslatorState::from_settings(&settings);
    assert_eq!((state.source.as_str(), state.target.as_str()), ("fr", "de"));
    assert_eq!(
        MockBackend::from_settings(&settings).latency(),
        Duration::from_millis(10)
    );
}
