use anyhow::{Context, Result};

/// Upstream used when `OPENAI_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Models offered when `MODELS` is not set.
pub const DEFAULT_MODELS: &[&str] = &[
    "anthropic/claude-3.5-sonnet",
    "anthropic/claude-3-opus",
    "openai/chatgpt-4o-latest",
    "openai/gpt-4",
];

/// Application configuration loaded from environment variables.
/// Read once at startup; nothing here changes for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the server-side OpenAI-compatible endpoint.
    pub openai_base_url: String,
    /// Server-side upstream key. Empty means only bring-your-own-key requests work.
    pub openai_api_key: String,
    pub models: Vec<String>,
    /// Access keys that unlock the server-side upstream credentials.
    pub access_keys: Vec<String>,
    pub request_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let models = match optional_env("MODELS") {
            Some(raw) => split_list(&raw),
            None => DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        };

        Ok(Config {
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_api_key: optional_env("OPENAI_API_KEY").unwrap_or_default(),
            models,
            access_keys: optional_env("API_KEY")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
            request_timeout_secs: optional_env("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|| "60".to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when `key` is one of the configured access keys.
    pub fn is_access_key(&self, key: &str) -> bool {
        !key.is_empty() && self.access_keys.iter().any(|k| k == key)
    }
}

/// Reads an env var, treating an empty or whitespace-only value as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits a comma-separated value, trimming items and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        openai_base_url: "http://upstream.test/v1".to_string(),
        openai_api_key: "server-secret".to_string(),
        models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        access_keys: vec!["team-key".to_string()],
        request_timeout_secs: 60,
        port: 8080,
        rust_log: "info".to_string(),
    }
}
