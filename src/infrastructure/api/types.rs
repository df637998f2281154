//! Wire types and errors for the chat server API.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Body accepted by both chat endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body returned by both chat endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// Body returned by the document ingestion endpoint.
///
/// `message` is informational and may be absent; the client only relies on
/// the file name and chunk count.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReceipt {
    pub file_name: String,
    pub chunks_processed: u32,
    #[serde(default)]
    pub message: Option<String>,
}

impl DocumentReceipt {
    /// System message appended to the transcript after ingestion.
    pub fn transcript_notice(&self) -> String {
        format!(
            "📄 \"{}\" 문서가 처리되었습니다. ({}개 청크)",
            self.file_name, self.chunks_processed
        )
    }
}

/// Failures talking to the chat server
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: HTTP {status}")]
    Status { endpoint: String, status: StatusCode },

    #[error("network error calling {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid response from {endpoint}: {source}")]
    InvalidResponse {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    pub fn status(endpoint: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
        }
    }

    pub fn network(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn invalid_response(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        Self::InvalidResponse {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub fn file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileRead { path, source }
    }

    /// Short user-facing detail in the product locale.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { status, .. } => format!("HTTP {}", status.as_u16()),
            ApiError::Network { source, .. } => {
                if source.is_connect() {
                    "서버에 연결할 수 없습니다".to_string()
                } else if source.is_timeout() {
                    "요청 시간이 초과되었습니다".to_string()
                } else {
                    "네트워크 오류가 발생했습니다".to_string()
                }
            }
            ApiError::InvalidResponse { .. } => "서버 응답을 해석할 수 없습니다".to_string(),
            ApiError::FileRead { path, .. } => {
                format!("파일을 읽을 수 없습니다: {}", path.display())
            }
        }
    }

    /// Line appended to the transcript when a chat request fails.
    pub fn transcript_message(&self) -> String {
        format!("오류가 발생했습니다: {}", self.user_message())
    }
}
