use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "damso",
    version,
    about = "채팅과 문서 기반(RAG) 대화를 위한 터미널 클라이언트"
)]
pub struct Cli {
    /// Chat server base URL (overrides configuration)
    #[arg(long)]
    pub server_url: Option<String>,
    /// Path to client.toml
    #[arg(long)]
    pub config: Option<String>,
    /// Start in RAG mode
    #[arg(long)]
    pub rag: bool,
    #[arg(long, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Document to upload before sending (send mode)
    #[arg(long)]
    pub file: Option<String>,
    /// Message to send (send mode)
    #[arg()]
    pub prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    Tui,
    Stdio,
    Send,
}
