use super::error::ConfigError;
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from client.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_url: String,
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Load configuration from a file path (or the default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Client-wide request timeout, when configured.
    ///
    /// None means requests never time out; an unresponsive server leaves the
    /// send path disabled until the user restarts the client.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: super::defaults::DEFAULT_SERVER_URL.to_string(),
            timeout_secs: None,
        }
    }
}
