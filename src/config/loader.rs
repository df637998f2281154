use super::AppConfig;
use super::defaults::{DEFAULT_CONFIG_PATH, ENV_PATH, SERVER_URL_ENV};
use super::error::ConfigError;
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    server_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path.
///
/// An explicitly given path must exist; the default path is optional and
/// falls back to built-in defaults when absent.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();

    let raw = match path {
        Some(path) => read_raw(path, true)?,
        None => read_raw(Path::new(DEFAULT_CONFIG_PATH), false)?,
    };

    validate_and_build(raw)
}

fn read_raw(path: &Path, required: bool) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading client configuration file");

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            if required {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            debug!("Configuration file missing; using defaults");
            return Ok(RawConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_and_build(raw: RawConfig) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();

    let server_url = std::env::var(SERVER_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or(raw.server_url)
        .unwrap_or(defaults.server_url);

    if !server_url.starts_with("http://") && !server_url.starts_with("https://") {
        return Err(ConfigError::InvalidServerUrl { url: server_url });
    }

    if raw.timeout_secs == Some(0) {
        return Err(ConfigError::ZeroTimeout);
    }

    Ok(AppConfig {
        server_url,
        timeout_secs: raw.timeout_secs,
    })
}
