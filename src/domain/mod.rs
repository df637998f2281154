pub mod types;

pub use types::{ChatMessage, ChatMode, MessageRole, StatusTone, UploadStatus};
