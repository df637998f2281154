//! Line-oriented interactive mode.
//!
//! A minimal REPL over stdin/stdout for terminals where the full TUI is
//! unavailable (pipes, dumb terminals, screen readers). Requests run
//! sequentially; the prompt label reflects the active mode.

use crate::application::client::{ChatClient, resolve_upload_request, upload_display_name};
use crate::domain::types::{ChatMode, UploadStatus};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum StdioError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
}

struct SessionState {
    mode: ChatMode,
}

enum LoopControl {
    Continue,
    Exit,
}

pub async fn run(client: Arc<ChatClient>, initial_mode: ChatMode) -> Result<(), StdioError> {
    let mut stdout = io::stdout();
    let stdin = BufReader::new(io::stdin());
    let mut lines = stdin.lines();
    let mut state = SessionState { mode: initial_mode };

    print_banner(&mut stdout, &state).await?;
    print_help(&mut stdout).await?;

    loop {
        prompt(&mut stdout, &state).await?;
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => {
                write_line(&mut stdout, "\n입력이 닫혔습니다. 종료합니다.").await?;
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if matches!(input.chars().next(), Some('/') | Some(':')) {
            match handle_command(input, &mut state, client.as_ref(), &mut stdout).await? {
                LoopControl::Continue => continue,
                LoopControl::Exit => break,
            }
        } else {
            handle_prompt(client.as_ref(), &state, input, &mut stdout).await?;
        }
    }

    stdout.flush().await?;
    Ok(())
}

async fn handle_command(
    input: &str,
    state: &mut SessionState,
    client: &ChatClient,
    stdout: &mut io::Stdout,
) -> Result<LoopControl, StdioError> {
    let command = input.trim_start_matches(|c| c == '/' || c == ':');
    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<String> = parts.map(|part| part.to_string()).collect();

    debug!(command = %name, "Processing command");

    match name.as_str() {
        "" => Ok(LoopControl::Continue),
        "help" | "?" => {
            print_help(stdout).await?;
            Ok(LoopControl::Continue)
        }
        "exit" | "quit" | "bye" | "q" => {
            write_line(stdout, "대화를 종료합니다.").await?;
            Ok(LoopControl::Exit)
        }
        "mode" => {
            let mode = match args.first().map(|value| value.to_ascii_lowercase()) {
                Some(value) if value == "chat" => ChatMode::Chat,
                Some(value) if value == "rag" => ChatMode::Rag,
                _ => state.mode.toggled(),
            };
            switch_mode(state, mode, stdout).await?;
            Ok(LoopControl::Continue)
        }
        "chat" => {
            switch_mode(state, ChatMode::Chat, stdout).await?;
            Ok(LoopControl::Continue)
        }
        "rag" => {
            switch_mode(state, ChatMode::Rag, stdout).await?;
            Ok(LoopControl::Continue)
        }
        "upload" | "file" => {
            handle_upload(&args, client, stdout).await?;
            Ok(LoopControl::Continue)
        }
        other => {
            write_line(
                stdout,
                &format!("알 수 없는 명령어입니다: /{other}. /help 를 입력해보세요."),
            )
            .await?;
            Ok(LoopControl::Continue)
        }
    }
}

async fn switch_mode(
    state: &mut SessionState,
    mode: ChatMode,
    stdout: &mut io::Stdout,
) -> io::Result<()> {
    state.mode = mode;
    write_line(stdout, mode.switch_notice()).await
}

async fn handle_upload(
    args: &[String],
    client: &ChatClient,
    stdout: &mut io::Stdout,
) -> Result<(), StdioError> {
    let Some(path) = resolve_upload_request(args) else {
        write_line(stdout, "업로드할 파일 경로를 입력해주세요. 예: /upload 문서.pdf").await?;
        return Ok(());
    };

    let display_name = upload_display_name(&path);
    write_line(stdout, &UploadStatus::uploading(&display_name).text).await?;

    match client.upload(&path).await {
        Ok(receipt) => {
            write_line(
                stdout,
                &UploadStatus::success(&receipt.file_name, receipt.chunks_processed).text,
            )
            .await?;
            write_line(stdout, &receipt.transcript_notice()).await?;
        }
        Err(err) => {
            error!(%err, "Document upload failed");
            write_line(stdout, &UploadStatus::failure(&err.user_message()).text).await?;
        }
    }

    Ok(())
}

async fn handle_prompt(
    client: &ChatClient,
    state: &SessionState,
    message: &str,
    stdout: &mut io::Stdout,
) -> Result<(), StdioError> {
    info!(mode = state.mode.as_str(), "Processing interactive chat request");
    write_line(stdout, "응답 생성 중...").await?;

    match client.send(state.mode, message).await {
        Ok(answer) => {
            write_line(stdout, "").await?;
            write_line(stdout, "AI:").await?;
            write_line(stdout, &answer).await?;
        }
        Err(err) => {
            error!(%err, "Chat request failed");
            write_line(stdout, &err.transcript_message()).await?;
        }
    }

    stdout.flush().await?;
    Ok(())
}

async fn print_banner(stdout: &mut io::Stdout, state: &SessionState) -> io::Result<()> {
    write_line(stdout, "damso 대화 모드를 시작합니다.").await?;
    write_line(stdout, state.mode.switch_notice()).await?;
    write_line(stdout, "메시지를 입력한 뒤 Enter 를 누르면 전송됩니다.").await?;
    Ok(())
}

async fn print_help(stdout: &mut io::Stdout) -> io::Result<()> {
    write_line(stdout, "\n사용할 수 있는 명령어:").await?;
    write_line(stdout, "  /help               이 도움말 표시").await?;
    write_line(stdout, "  /mode [chat|rag]    대화 모드 전환").await?;
    write_line(stdout, "  /chat               일반 채팅 모드로 전환").await?;
    write_line(stdout, "  /rag                RAG 모드로 전환").await?;
    write_line(stdout, "  /upload <경로>      문서 업로드").await?;
    write_line(stdout, "  /exit               종료").await?;
    write_line(stdout, "명령어가 아닌 입력은 그대로 서버에 전송됩니다.").await?;
    Ok(())
}

async fn prompt(stdout: &mut io::Stdout, state: &SessionState) -> io::Result<()> {
    let label = format!("{}> ", state.mode.as_str());
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await
}

async fn write_line(stdout: &mut io::Stdout, line: &str) -> io::Result<()> {
    stdout.write_all(line.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    Ok(())
}
