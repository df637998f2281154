//! Completion-event handling tests
//!
//! Exercises the state transitions the event loop performs when a network
//! task reports back, without a live server.

use damso::api::{ApiError, DocumentReceipt, StatusCode};
use damso::tui::screens::chat::messaging::apply_event;
use damso::tui::screens::chat::{ChatState, ResponseEvent};
use damso::types::{ChatMode, MessageRole, StatusTone};

fn receipt(file_name: &str, chunks: u32) -> DocumentReceipt {
    serde_json::from_value(serde_json::json!({
        "fileName": file_name,
        "chunksProcessed": chunks,
    }))
    .expect("receipt")
}

fn loading_state(mode: ChatMode) -> ChatState {
    let mut state = ChatState::new(mode);
    state.input = "서울의 수도는?".to_string();
    state.prepare_submit().expect("staged send");
    state
}

#[test]
fn test_answer_appends_exactly_one_assistant_message() {
    let mut state = loading_state(ChatMode::Chat);
    let before = state.messages.len();

    apply_event(&mut state, ResponseEvent::Answer("서울입니다.".to_string()));

    assert_eq!(state.messages.len(), before + 1);
    let last = state.messages.last().expect("message");
    assert_eq!(last.role, MessageRole::Assistant);
    assert_eq!(last.content, "서울입니다.");
    // Placeholder gone, send path re-enabled
    assert!(!state.loading);
}

#[test]
fn test_failed_chat_surfaces_in_transcript() {
    let mut state = loading_state(ChatMode::Rag);
    let before = state.messages.len();

    let err = ApiError::status("/api/rag/chat", StatusCode::INTERNAL_SERVER_ERROR);
    apply_event(&mut state, ResponseEvent::ChatFailed(err.transcript_message()));

    assert_eq!(state.messages.len(), before + 1);
    let last = state.messages.last().expect("message");
    assert_eq!(last.role, MessageRole::Assistant);
    assert!(last.content.contains("오류가 발생했습니다"));
    assert!(last.content.contains("HTTP 500"));
    assert!(!state.loading);
}

#[test]
fn test_upload_done_sets_status_and_appends_system_message() {
    let mut state = ChatState::new(ChatMode::Rag);
    state.uploads_in_flight = 1;
    let before = state.messages.len();

    apply_event(&mut state, ResponseEvent::UploadDone(receipt("a.pdf", 3)));

    let status = state.upload_status.as_ref().expect("status");
    assert_eq!(status.tone, StatusTone::Success);
    assert!(status.text.contains("a.pdf"));
    assert!(status.text.contains('3'));

    assert_eq!(state.messages.len(), before + 1);
    let last = state.messages.last().expect("message");
    assert_eq!(last.role, MessageRole::System);
    assert!(last.content.contains("a.pdf"));
    assert!(last.content.contains("3개 청크"));

    assert_eq!(state.uploads_in_flight, 0);
}

#[test]
fn test_upload_failed_touches_only_the_status_line() {
    let mut state = ChatState::new(ChatMode::Rag);
    state.uploads_in_flight = 1;

    let err = ApiError::status("/api/documents", StatusCode::INTERNAL_SERVER_ERROR);
    apply_event(&mut state, ResponseEvent::UploadFailed(err.user_message()));

    let status = state.upload_status.as_ref().expect("status");
    assert_eq!(status.tone, StatusTone::Error);
    assert!(status.text.contains("업로드 실패"));
    assert!(status.text.contains("HTTP 500"));

    // No transcript entry for upload failures
    assert!(state.messages.is_empty());
    assert_eq!(state.uploads_in_flight, 0);
}

#[test]
fn test_concurrent_uploads_last_event_wins() {
    let mut state = ChatState::new(ChatMode::Rag);
    state.uploads_in_flight = 2;

    apply_event(&mut state, ResponseEvent::UploadDone(receipt("a.pdf", 2)));
    let err = ApiError::status("/api/documents", StatusCode::BAD_GATEWAY);
    apply_event(&mut state, ResponseEvent::UploadFailed(err.user_message()));

    // The status line follows whichever attempt completed last
    let status = state.upload_status.as_ref().expect("status");
    assert_eq!(status.tone, StatusTone::Error);
    assert_eq!(state.uploads_in_flight, 0);
}
