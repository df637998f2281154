//! Command parsing and handling tests

use damso::client::resolve_upload_request;
use damso::tui::screens::chat::messaging::{CommandOutcome, handle_command};
use damso::tui::screens::chat::{ChatState, CommandResult, parse_command};
use damso::types::{ChatMode, MessageRole};

#[test]
fn test_is_command_with_slash() {
    let mut state = ChatState::new(ChatMode::Chat);
    state.input = "/help".to_string();
    assert!(state.is_command());
}

#[test]
fn test_is_command_with_colon() {
    let mut state = ChatState::new(ChatMode::Chat);
    state.input = ":rag".to_string();
    assert!(state.is_command());
}

#[test]
fn test_is_not_command() {
    let mut state = ChatState::new(ChatMode::Chat);
    state.input = "안녕하세요".to_string();
    assert!(!state.is_command());
}

#[test]
fn test_get_command() {
    let mut state = ChatState::new(ChatMode::Chat);
    state.input = "/upload 문서.pdf".to_string();
    assert_eq!(state.get_command(), Some("upload"));
}

#[test]
fn test_parse_mode_commands() {
    assert_eq!(parse_command("/chat"), CommandResult::SetMode(ChatMode::Chat));
    assert_eq!(parse_command("/rag"), CommandResult::SetMode(ChatMode::Rag));
    assert_eq!(parse_command("/mode"), CommandResult::ToggleMode);
    assert_eq!(
        parse_command("/mode rag"),
        CommandResult::SetMode(ChatMode::Rag)
    );
    assert_eq!(
        parse_command("/mode chat"),
        CommandResult::SetMode(ChatMode::Chat)
    );
    assert_eq!(parse_command("/mode banana"), CommandResult::ToggleMode);
}

#[test]
fn test_parse_upload_keeps_all_paths() {
    assert_eq!(
        parse_command("/upload a.pdf b.pdf"),
        CommandResult::Upload(vec!["a.pdf".to_string(), "b.pdf".to_string()])
    );
}

#[test]
fn test_parse_misc_commands() {
    assert_eq!(parse_command("/help"), CommandResult::ShowHelp);
    assert_eq!(parse_command(":?"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/reset"), CommandResult::Reset);
    assert_eq!(parse_command("/exit"), CommandResult::Exit);
    assert_eq!(
        parse_command("/frobnicate"),
        CommandResult::Unknown("frobnicate".to_string())
    );
}

#[test]
fn test_handle_command_set_mode_appends_notice() {
    let mut state = ChatState::new(ChatMode::Chat);

    let outcome = handle_command(&mut state, "/rag");

    assert!(matches!(outcome, CommandOutcome::Handled));
    assert_eq!(state.mode, ChatMode::Rag);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, MessageRole::System);
}

#[test]
fn test_handle_command_upload_uses_first_path_only() {
    let mut state = ChatState::new(ChatMode::Rag);

    let outcome = handle_command(&mut state, "/upload a.pdf b.pdf c.pdf");

    match outcome {
        CommandOutcome::StartUpload(path) => assert_eq!(path.to_string_lossy(), "a.pdf"),
        _ => panic!("expected an upload to start"),
    }
}

#[test]
fn test_handle_command_upload_without_path_changes_nothing() {
    let mut state = ChatState::new(ChatMode::Rag);

    let outcome = handle_command(&mut state, "/upload");

    assert!(matches!(outcome, CommandOutcome::Handled));
    assert!(state.upload_status.is_none());
    assert_eq!(state.uploads_in_flight, 0);
}

#[test]
fn test_handle_command_reset_clears_transcript() {
    let mut state = ChatState::new(ChatMode::Chat);
    state.set_mode(ChatMode::Rag);
    assert!(!state.messages.is_empty());

    let outcome = handle_command(&mut state, "/reset");

    assert!(matches!(outcome, CommandOutcome::Handled));
    // Only the reset notice remains
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn test_handle_command_unknown_appends_notice() {
    let mut state = ChatState::new(ChatMode::Chat);

    let outcome = handle_command(&mut state, "/xyz");

    assert!(matches!(outcome, CommandOutcome::Handled));
    assert_eq!(state.messages.len(), 1);
    assert!(state.messages[0].content.contains("xyz"));
}

#[test]
fn test_handle_command_exit() {
    let mut state = ChatState::new(ChatMode::Chat);
    assert!(matches!(
        handle_command(&mut state, "/exit"),
        CommandOutcome::Exit
    ));
}

#[test]
fn test_resolve_upload_request_empty() {
    assert!(resolve_upload_request(&[]).is_none());
    assert!(resolve_upload_request(&["   ".to_string()]).is_none());
}

#[test]
fn test_resolve_upload_request_takes_first() {
    let paths = vec!["a.pdf".to_string(), "b.pdf".to_string()];
    let resolved = resolve_upload_request(&paths).expect("path");
    assert_eq!(resolved.to_string_lossy(), "a.pdf");
}

#[test]
fn test_resolve_upload_request_strips_quotes() {
    let paths = vec!["'/tmp/문서 모음.pdf'".to_string()];
    let resolved = resolve_upload_request(&paths).expect("path");
    assert_eq!(resolved.to_string_lossy(), "/tmp/문서 모음.pdf");
}

#[test]
fn test_resolve_upload_request_expands_tilde() {
    let paths = vec!["~/docs/a.pdf".to_string()];
    let resolved = resolve_upload_request(&paths).expect("path");
    assert!(!resolved.to_string_lossy().starts_with('~'));
    assert!(resolved.to_string_lossy().ends_with("docs/a.pdf"));
}
