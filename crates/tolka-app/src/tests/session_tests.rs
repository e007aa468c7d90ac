use tolka_core::fallback_catalog;
use tolka_types::{LanguageEntry, TranslationResult, TranslationStatus};

use crate::session::SessionState;

fn session() -> SessionState {
    SessionState::new(LanguageEntry::new("English", "en"))
}

#[test]
fn test_push_line_accumulates_until_submitted() {
    let mut session = session();
    session.push_line("Hello");
    session.push_line("world");
    assert_eq!(session.input, "Hello\nworld");

    session.record(TranslationResult::translated("Hallo\nWelt"));
    assert_eq!(session.translation_count, 1);
    assert_eq!(session.last_input.as_deref(), Some("Hello\nworld"));

    session.push_line("Next");
    assert_eq!(session.input, "Next");
}

#[test]
fn test_empty_input_is_not_counted() {
    let mut session = session();
    session.record(TranslationResult::status_message(
        "Please enter some text to translate.",
        TranslationStatus::EmptyInput,
    ));

    assert_eq!(session.translation_count, 0);
    assert!(session.last_input.is_none());
}

#[test]
fn test_failed_translation_is_counted() {
    let mut session = session();
    session.push_line("Hello");
    session.record(TranslationResult::failed(
        "Translation error: boom",
        tolka_types::FaultKind::Generic,
        "boom",
    ));

    assert_eq!(session.translation_count, 1);
}

#[test]
fn test_select_keeps_previous_on_unknown() {
    let catalog = fallback_catalog();
    let mut session = session();

    assert_eq!(session.select(&catalog, "fr").unwrap().display_name, "French");
    assert!(session.select(&catalog, "Klingon").is_none());
    assert_eq!(session.target.code, "fr");
}

#[test]
fn test_clear_keeps_counter() {
    let mut session = session();
    session.push_line("Hello");
    session.record(TranslationResult::translated("Hola"));
    session.clear();

    assert!(session.input.is_empty());
    assert!(session.last_result.is_none());
    assert_eq!(session.translation_count, 1);
}
