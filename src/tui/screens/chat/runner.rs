//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use super::messaging::{self, CommandOutcome, ResponseEvent};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::application::client::{ChatClient, resolve_upload_request, upload_display_name};
use crate::domain::types::{ChatMessage, ChatMode, UploadStatus};
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI chat interface
pub async fn run_chat(client: Arc<ChatClient>, mode: ChatMode) -> Result<(), Box<dyn Error>> {
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new(mode);
    state.add_message(ChatMessage::system(
        "대화를 시작합니다. /help 를 입력하면 명령어 목록을 볼 수 있습니다.",
    ));

    let result = run_chat_loop(&mut terminal, &mut state, client).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
async fn run_chat_loop(
    terminal: &mut Tui,
    state: &mut ChatState,
    client: Arc<ChatClient>,
) -> Result<(), Box<dyn Error>> {
    let (response_tx, mut response_rx) = mpsc::channel::<ResponseEvent>(16);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, client.server_url());
        })?;

        while let Ok(event) = response_rx.try_recv() {
            messaging::apply_event(state, event);
        }

        let timeout = if state.loading || state.uploads_in_flight > 0 {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let input_event = event::read()?;

            match handle_input(state, input_event) {
                InputAction::Exit => {
                    return Ok(());
                }

                InputAction::Submit => {
                    if let Some(message) = state.prepare_submit() {
                        let client = client.clone();
                        let mode = state.mode;
                        let tx = response_tx.clone();
                        tokio::spawn(async move {
                            messaging::send_message(client, mode, message, tx).await;
                        });
                    }
                }

                InputAction::Command(cmd) => match messaging::handle_command(state, &cmd) {
                    CommandOutcome::Handled => {}
                    CommandOutcome::Exit => return Ok(()),
                    CommandOutcome::StartUpload(path) => {
                        start_upload(state, client.clone(), path, response_tx.clone());
                    }
                },

                InputAction::Paste(data) => {
                    handle_paste(state, client.clone(), data, response_tx.clone());
                }

                InputAction::ScrollUp => state.scroll_up(),
                InputAction::ScrollDown => state.scroll_down(1000),
                InputAction::ScrollTop => state.scroll_offset = 0,
                InputAction::ScrollBottom => state.scroll_to_bottom(),
                InputAction::None => {}
            }
        } else {
            state.tick_loading();
        }
    }
}

/// Begin an upload: set the neutral status and spawn the request.
///
/// Uploads are not serialized; dropping a second file while one is in flight
/// starts another request, and the status line follows whichever finishes
/// last.
fn start_upload(
    state: &mut ChatState,
    client: Arc<ChatClient>,
    path: PathBuf,
    tx: mpsc::Sender<ResponseEvent>,
) {
    let display_name = upload_display_name(&path);
    state.set_upload_status(UploadStatus::uploading(&display_name));
    state.uploads_in_flight += 1;

    tokio::spawn(async move {
        messaging::upload_file(client, path, tx).await;
    });
}

/// Route a paste event.
///
/// In RAG mode a dropped file arrives as a paste carrying its path; when the
/// first pasted line names an existing file it is uploaded (further lines are
/// ignored). Anything else lands in the input buffer.
fn handle_paste(
    state: &mut ChatState,
    client: Arc<ChatClient>,
    data: String,
    tx: mpsc::Sender<ResponseEvent>,
) {
    if state.mode == ChatMode::Rag {
        let lines: Vec<String> = data.lines().map(|line| line.to_string()).collect();
        if let Some(path) = resolve_upload_request(&lines) {
            if path.is_file() {
                start_upload(state, client, path, tx);
                return;
            }
        }
    }

    for ch in data.chars().filter(|c| !c.is_control()) {
        state.insert_char(ch);
    }
}
