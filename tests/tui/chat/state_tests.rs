//! ChatState tests

use damso::tui::screens::chat::ChatState;
use damso::types::{ChatMessage, ChatMode, MessageRole, StatusTone, UploadStatus};

#[test]
fn test_chat_state_new() {
    let state = ChatState::new(ChatMode::Chat);

    assert!(state.messages.is_empty());
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert_eq!(state.scroll_offset, 0);
    assert_eq!(state.mode, ChatMode::Chat);
    assert!(!state.loading);
    assert!(state.upload_status.is_none());
    assert_eq!(state.uploads_in_flight, 0);
}

#[test]
fn test_chat_state_default_mode_is_chat() {
    let state = ChatState::default();
    assert_eq!(state.mode, ChatMode::Chat);
}

#[test]
fn test_chat_state_new_rag() {
    let state = ChatState::new(ChatMode::Rag);
    assert_eq!(state.mode, ChatMode::Rag);
}

#[test]
fn test_add_message() {
    let mut state = ChatState::new(ChatMode::Chat);

    state.add_message(ChatMessage::user("안녕하세요"));
    state.add_message(ChatMessage::assistant("안녕하세요!"));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, MessageRole::User);
    assert_eq!(state.messages[1].role, MessageRole::Assistant);
}

#[test]
fn test_set_mode_appends_notice() {
    let mut state = ChatState::new(ChatMode::Chat);

    state.set_mode(ChatMode::Rag);

    assert_eq!(state.mode, ChatMode::Rag);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, MessageRole::System);
    assert_eq!(state.messages[0].content, ChatMode::Rag.switch_notice());
}

#[test]
fn test_set_mode_same_mode_still_notifies() {
    let mut state = ChatState::new(ChatMode::Chat);

    state.set_mode(ChatMode::Chat);
    state.set_mode(ChatMode::Chat);

    assert_eq!(state.messages.len(), 2);
}

#[test]
fn test_toggle_mode() {
    let mut state = ChatState::new(ChatMode::Chat);

    state.toggle_mode();
    assert_eq!(state.mode, ChatMode::Rag);

    state.toggle_mode();
    assert_eq!(state.mode, ChatMode::Chat);
}

#[test]
fn test_prepare_submit_happy_path() {
    let mut state = ChatState::new(ChatMode::Chat);
    state.input = "  질문입니다  ".to_string();
    state.cursor_pos = state.input.len();

    let message = state.prepare_submit();

    assert_eq!(message.as_deref(), Some("질문입니다"));
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert!(state.loading);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, MessageRole::User);
    assert_eq!(state.messages[0].content, "질문입니다");
}

#[test]
fn test_prepare_submit_whitespace_only_is_noop() {
    let mut state = ChatState::new(ChatMode::Chat);
    state.input = "   ".to_string();

    let message = state.prepare_submit();

    assert!(message.is_none());
    assert!(state.messages.is_empty());
    assert!(!state.loading);
    // Input left untouched, as the browser leaves a whitespace-only textarea
    assert_eq!(state.input, "   ");
}

#[test]
fn test_prepare_submit_blocked_while_loading() {
    let mut state = ChatState::new(ChatMode::Chat);
    state.loading = true;
    state.input = "두 번째 질문".to_string();

    let message = state.prepare_submit();

    assert!(message.is_none());
    assert!(state.messages.is_empty());
    assert_eq!(state.input, "두 번째 질문");
}

#[test]
fn test_set_upload_status_overwrites() {
    let mut state = ChatState::new(ChatMode::Rag);

    state.set_upload_status(UploadStatus::uploading("a.pdf"));
    state.set_upload_status(UploadStatus::failure("HTTP 500"));

    let status = state.upload_status.as_ref().expect("status");
    assert_eq!(status.tone, StatusTone::Error);
    assert!(status.text.contains("HTTP 500"));
}

#[test]
fn test_reset() {
    let mut state = ChatState::new(ChatMode::Rag);
    state.add_message(ChatMessage::user("테스트"));
    state.set_upload_status(UploadStatus::uploading("a.pdf"));
    state.scroll_offset = 10;

    state.reset();

    assert!(state.messages.is_empty());
    assert!(state.upload_status.is_none());
    assert_eq!(state.scroll_offset, 0);
    // Mode survives a reset
    assert_eq!(state.mode, ChatMode::Rag);
}

#[test]
fn test_loading_tick() {
    let mut state = ChatState::new(ChatMode::Chat);
    state.loading = true;
    state.loading_frame = 0;

    state.tick_loading();
    assert_eq!(state.loading_frame, 1);

    state.loading_frame = 3;
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);
}

#[test]
fn test_loading_tick_idle_does_not_advance() {
    let mut state = ChatState::new(ChatMode::Chat);
    state.loading_frame = 2;

    state.tick_loading();

    assert_eq!(state.loading_frame, 2);
}
