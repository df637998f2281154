pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_CONFIG_PATH: &str = "config/client.toml";
pub const ENV_PATH: &str = "config/.env";

/// Environment variable that overrides the configured server URL.
pub const SERVER_URL_ENV: &str = "DAMSO_SERVER_URL";
