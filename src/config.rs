//! Application configuration loaded from environment variables.
//!
//! The storefront builder provisions per-account function endpoints, so the
//! two endpoint URLs have no meaningful default and must be configured. File
//! locations fall back to the platform config directory.

use std::env;
use std::path::PathBuf;

/// Default whole-request timeout, refresh exchange included.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Auth endpoint (login/register/refresh actions)
    pub auth_url: String,
    /// Panel endpoint (settings, staff, notifications, backups)
    pub api_url: String,
    /// Where the session document lives
    pub session_path: PathBuf,
    /// Where the local catalog staging file lives
    pub catalog_path: PathBuf,
    /// Whole-request timeout in seconds (applies to every call, including
    /// the token refresh exchange)
    pub http_timeout_secs: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            auth_url: "http://localhost:8080/auth".to_string(),
            api_url: "http://localhost:8080/panel".to_string(),
            session_path: PathBuf::from("session.json"),
            catalog_path: PathBuf::from("catalog.json"),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file next to the working directory is honored for local use.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            auth_url: env::var("STOREFRONT_AUTH_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("STOREFRONT_AUTH_URL"))?,
            api_url: env::var("STOREFRONT_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("STOREFRONT_API_URL"))?,
            session_path: env::var("STOREFRONT_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_path("session.json")),
            catalog_path: env::var("STOREFRONT_CATALOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_data_path("catalog.json")),
            http_timeout_secs: env::var("STOREFRONT_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }
}

/// Resolve a file under the per-user config directory, falling back to the
/// working directory when the platform reports none.
fn default_data_path(file: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storefront-admin")
        .join(file)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
