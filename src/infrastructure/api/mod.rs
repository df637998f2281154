//! HTTP access to the chat server.

pub mod http;
pub mod types;

pub use http::ApiTransport;
pub use reqwest::StatusCode;
pub use types::{ApiError, ChatAnswer, ChatRequest, DocumentReceipt};
