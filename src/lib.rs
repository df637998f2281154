pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use application::{client, stdio};
pub use cli::{Cli, RunMode};
pub use config::AppConfig;
pub use domain::types;
pub use infrastructure::api;

use application::client::{ChatClient, resolve_upload_request};
use domain::types::ChatMode;
use serde_json::json;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // Interactive modes own the terminal; logging would corrupt the screen
    let quiet = matches!(cli.mode, RunMode::Tui | RunMode::Stdio);
    init_tracing(quiet);
    info!("Starting damso");
    debug!(mode = ?cli.mode, config = ?cli.config, rag = cli.rag, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let mut file_config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path");
    }
    if let Some(server_url) = cli.server_url.clone() {
        if server_url != file_config.server_url {
            info!(url = %server_url, "Overriding server URL from CLI flag");
        }
        file_config.server_url = server_url;
    }

    let client = Arc::new(ChatClient::from_config(&file_config));
    let mode = if cli.rag { ChatMode::Rag } else { ChatMode::Chat };

    info!(mode = ?cli.mode, server = client.server_url(), "Running client in selected mode");
    match cli.mode {
        RunMode::Tui => {
            tui::screens::chat::run_chat(client, mode).await?;
        }
        RunMode::Stdio => {
            stdio::run(client, mode).await?;
        }
        RunMode::Send => {
            run_send(client, mode, &cli).await?;
        }
    }
    info!("Client execution finished");
    Ok(())
}

/// One-shot mode: optional upload, one chat request, answer on stdout.
async fn run_send(
    client: Arc<ChatClient>,
    mode: ChatMode,
    cli: &Cli,
) -> Result<(), Box<dyn Error>> {
    if let Some(file) = &cli.file {
        let path = resolve_upload_request(std::slice::from_ref(file))
            .ok_or("업로드할 파일 경로가 비어 있습니다")?;
        let receipt = client.upload(&path).await?;
        info!(
            file = receipt.file_name.as_str(),
            chunks = receipt.chunks_processed,
            "Upload complete"
        );
    }

    let message = cli.prompt.join(" ").trim().to_string();
    if message.is_empty() {
        return Err("send 모드에는 보낼 메시지가 필요합니다".into());
    }

    let answer = client.send(mode, message).await?;
    let output = json!({
        "mode": mode.as_str(),
        "answer": answer,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
