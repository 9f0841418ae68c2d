//! Application configuration.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file in the working directory.

use std::time::Duration;

use crate::errors::{AppError, AppResult};

/// Default backend address.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default database schema shown by the browser.
pub const DEFAULT_SCHEMA: &str = "store";

/// Runtime configuration for the data-access layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base address, without a trailing slash.
    pub api_url: String,
    /// Schema selected at startup.
    pub schema: String,
    /// Per-request timeout. `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            schema: DEFAULT_SCHEMA.to_string(),
            request_timeout: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `.env` (if present) and the environment.
    ///
    /// # Errors
    /// Returns `AppError::Config` if `HUB_REQUEST_TIMEOUT_SECS` is not a number.
    pub fn load() -> AppResult<Self> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("HUB_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(schema) = lookup("HUB_SCHEMA").filter(|v| !v.trim().is_empty()) {
            config.schema = schema.trim().to_string();
        }
        if let Some(raw) = lookup("HUB_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                AppError::Config(format!("HUB_REQUEST_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

/// Load .env file from the working directory (best-effort, no error if missing).
fn load_dotenv() {
    let env_path = std::path::Path::new(".env");
    let Ok(content) = std::fs::read_to_string(env_path) else {
        return;
    };
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            // Only set if not already set by the environment
            if std::env::var(key).is_err() {
                std::env::set_var(key, value.trim());
            }
        }
    }
    tracing::debug!(path = %env_path.display(), "已加载 .env 文件");
}
