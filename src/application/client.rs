//! High-level client for the chat server.

use crate::config::AppConfig;
use crate::domain::types::ChatMode;
use crate::infrastructure::api::{ApiError, ApiTransport, ChatAnswer, ChatRequest, DocumentReceipt};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Server path for document ingestion
const DOCUMENTS_PATH: &str = "/api/documents";

/// Multipart field name the server expects for uploads
const UPLOAD_FIELD: &str = "file";

/// Client for the chat, RAG chat, and document endpoints
#[derive(Debug, Clone)]
pub struct ChatClient {
    transport: ApiTransport,
}

impl ChatClient {
    pub fn new(server_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            transport: ApiTransport::new(server_url, timeout),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.server_url.clone(), config.timeout())
    }

    pub fn server_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Send one message to the endpoint selected by `mode`.
    pub async fn send(
        &self,
        mode: ChatMode,
        message: impl Into<String>,
    ) -> Result<String, ApiError> {
        let message = message.into();
        let path = mode.endpoint_path();
        info!(endpoint = path, chars = message.len(), "Sending chat message");

        let answer: ChatAnswer = self
            .transport
            .post_json(path, &ChatRequest { message })
            .await?;
        debug!(
            endpoint = path,
            chars = answer.answer.len(),
            "Received answer"
        );
        Ok(answer.answer)
    }

    /// Upload one document for ingestion.
    pub async fn upload(&self, path: &Path) -> Result<DocumentReceipt, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ApiError::file_read(path.to_path_buf(), source))?;
        let file_name = upload_display_name(path);

        info!(
            file = file_name.as_str(),
            bytes = bytes.len(),
            "Uploading document"
        );
        let receipt: DocumentReceipt = self
            .transport
            .post_file(DOCUMENTS_PATH, UPLOAD_FIELD, file_name, bytes)
            .await?;
        info!(
            file = receipt.file_name.as_str(),
            chunks = receipt.chunks_processed,
            "Document ingested"
        );
        Ok(receipt)
    }
}

/// Name shown to the user (and sent to the server) for an upload.
pub fn upload_display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Pick the file an upload request refers to.
///
/// Dropped or pasted paths arrive one per entry, possibly shell-quoted; only
/// the first non-empty entry is used, the rest are ignored.
pub fn resolve_upload_request(paths: &[String]) -> Option<PathBuf> {
    paths
        .iter()
        .map(|raw| raw.trim().trim_matches('\'').trim_matches('"'))
        .find(|raw| !raw.is_empty())
        .map(|raw| PathBuf::from(shellexpand::tilde(raw).into_owned()))
}
