//! Core types shared by every interface surface.

use chrono::{DateTime, Local};

/// Conversation mode selecting which server endpoint answers a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatMode {
    /// Plain chat, answered by the model alone.
    #[default]
    Chat,
    /// Document-grounded chat, answered from uploaded documents.
    Rag,
}

impl ChatMode {
    /// Server path that answers messages in this mode.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            ChatMode::Chat => "/api/chat",
            ChatMode::Rag => "/api/rag/chat",
        }
    }

    /// Badge label shown in the status bar.
    pub fn badge(self) -> &'static str {
        match self {
            ChatMode::Chat => "일반",
            ChatMode::Rag => "RAG",
        }
    }

    /// Input placeholder shown while the input buffer is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            ChatMode::Chat => "메시지를 입력하세요...",
            ChatMode::Rag => "문서에 대해 질문하세요...",
        }
    }

    /// System notice appended to the transcript on every switch.
    pub fn switch_notice(self) -> &'static str {
        match self {
            ChatMode::Chat => "일반 채팅 모드로 전환했습니다.",
            ChatMode::Rag => "RAG 모드로 전환했습니다. 먼저 문서를 업로드해주세요.",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ChatMode::Chat => ChatMode::Rag,
            ChatMode::Rag => ChatMode::Chat,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChatMode::Chat => "chat",
            ChatMode::Rag => "rag",
        }
    }
}

/// A single transcript entry
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }
}

/// Upload status line. A single value overwritten on every attempt;
/// no history is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStatus {
    pub text: String,
    pub tone: StatusTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Success,
    Error,
}

impl UploadStatus {
    /// Status shown while a document is being sent.
    pub fn uploading(file_name: &str) -> Self {
        Self {
            text: format!("\"{file_name}\" 업로드 중..."),
            tone: StatusTone::Neutral,
        }
    }

    /// Status shown after the server confirmed ingestion.
    pub fn success(file_name: &str, chunks: u32) -> Self {
        Self {
            text: format!("\"{file_name}\" 업로드 완료 ({chunks}개 청크 처리)"),
            tone: StatusTone::Success,
        }
    }

    /// Status shown when an upload attempt failed.
    pub fn failure(detail: &str) -> Self {
        Self {
            text: format!("업로드 실패: {detail}"),
            tone: StatusTone::Error,
        }
    }
}
