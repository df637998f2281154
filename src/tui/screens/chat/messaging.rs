//! Messaging handlers for the chat screen.
//!
//! Network calls run on spawned tasks and report back as `ResponseEvent`s;
//! `apply_event` folds each completion into the screen state.

use super::input::{CommandResult, parse_command};
use super::state::ChatState;
use crate::application::client::{ChatClient, resolve_upload_request};
use crate::domain::types::{ChatMessage, ChatMode, UploadStatus};
use crate::infrastructure::api::DocumentReceipt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

const HELP_TEXT: &str = r#"사용할 수 있는 명령어:
  /help               이 도움말 표시
  /mode [chat|rag]    대화 모드 전환
  /chat               일반 채팅 모드로 전환
  /rag                RAG 모드로 전환
  /upload <경로>      문서 업로드 (파일을 창에 끌어다 놓아도 됩니다)
  /reset              대화 초기화
  /exit               종료"#;

/// Completion events reported by spawned network tasks
pub enum ResponseEvent {
    /// Chat request answered
    Answer(String),
    /// Chat request failed; payload is the transcript line
    ChatFailed(String),
    /// Upload finished
    UploadDone(DocumentReceipt),
    /// Upload failed; payload is the user-facing detail
    UploadFailed(String),
}

/// What the runner must do after a command was handled
pub enum CommandOutcome {
    Handled,
    StartUpload(PathBuf),
    Exit,
}

/// Send one chat message and report the outcome
pub(super) async fn send_message(
    client: Arc<ChatClient>,
    mode: ChatMode,
    message: String,
    tx: mpsc::Sender<ResponseEvent>,
) {
    match client.send(mode, message).await {
        Ok(answer) => {
            let _ = tx.send(ResponseEvent::Answer(answer)).await;
        }
        Err(err) => {
            let _ = tx
                .send(ResponseEvent::ChatFailed(err.transcript_message()))
                .await;
        }
    }
}

/// Upload one document and report the outcome
pub(super) async fn upload_file(
    client: Arc<ChatClient>,
    path: PathBuf,
    tx: mpsc::Sender<ResponseEvent>,
) {
    match client.upload(&path).await {
        Ok(receipt) => {
            let _ = tx.send(ResponseEvent::UploadDone(receipt)).await;
        }
        Err(err) => {
            let _ = tx.send(ResponseEvent::UploadFailed(err.user_message())).await;
        }
    }
}

/// Fold a completion event into the screen state.
///
/// Both chat arms clear the loading flag, so the placeholder disappears and
/// the send path is re-enabled on every outcome. Upload failures touch only
/// the status line; the transcript gets a message on success only.
pub fn apply_event(state: &mut ChatState, event: ResponseEvent) {
    match event {
        ResponseEvent::Answer(answer) => {
            state.loading = false;
            state.add_message(ChatMessage::assistant(answer));
        }
        ResponseEvent::ChatFailed(line) => {
            state.loading = false;
            state.add_message(ChatMessage::assistant(line));
        }
        ResponseEvent::UploadDone(receipt) => {
            state.uploads_in_flight = state.uploads_in_flight.saturating_sub(1);
            state.set_upload_status(UploadStatus::success(
                &receipt.file_name,
                receipt.chunks_processed,
            ));
            state.add_message(ChatMessage::system(receipt.transcript_notice()));
        }
        ResponseEvent::UploadFailed(detail) => {
            state.uploads_in_flight = state.uploads_in_flight.saturating_sub(1);
            state.set_upload_status(UploadStatus::failure(&detail));
        }
    }
}

/// Handle command execution
pub fn handle_command(state: &mut ChatState, input: &str) -> CommandOutcome {
    match parse_command(input) {
        CommandResult::None => CommandOutcome::Handled,

        CommandResult::ShowHelp => {
            state.add_message(ChatMessage::system(HELP_TEXT));
            CommandOutcome::Handled
        }

        CommandResult::SetMode(mode) => {
            state.set_mode(mode);
            CommandOutcome::Handled
        }

        CommandResult::ToggleMode => {
            state.toggle_mode();
            CommandOutcome::Handled
        }

        CommandResult::Upload(paths) => match resolve_upload_request(&paths) {
            Some(path) => CommandOutcome::StartUpload(path),
            None => {
                state.add_message(ChatMessage::system(
                    "업로드할 파일 경로를 입력해주세요. 예: /upload 문서.pdf",
                ));
                CommandOutcome::Handled
            }
        },

        CommandResult::Reset => {
            state.reset();
            state.add_message(ChatMessage::system("대화를 초기화했습니다."));
            CommandOutcome::Handled
        }

        CommandResult::Exit => CommandOutcome::Exit,

        CommandResult::Unknown(cmd) => {
            state.add_message(ChatMessage::system(format!(
                "알 수 없는 명령어입니다: /{cmd}. /help 를 입력해보세요."
            )));
            CommandOutcome::Handled
        }
    }
}
