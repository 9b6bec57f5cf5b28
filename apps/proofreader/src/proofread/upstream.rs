//! Upstream resolution. Decides which endpoint and key a completion request uses.
//!
//! Callers holding one of the configured access keys borrow the server's own
//! upstream, restricted to catalog models. Everyone else brings their own key
//! and, optionally, their own OpenAI-compatible endpoint.

use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{LlmError, Upstream};
use crate::presets::PresetCatalog;

/// Per-request credentials, flattened into every completion request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// The upstream a request resolved to, and whether it is the server's own.
#[derive(Debug, Clone)]
pub struct ResolvedUpstream {
    pub upstream: Upstream,
    pub server_owned: bool,
}

impl ResolvedUpstream {
    /// Upstream rejections are only relayed to callers who supplied the key.
    pub fn error(&self, err: LlmError) -> AppError {
        if self.server_owned {
            AppError::ServerLlm(err)
        } else {
            AppError::Llm(err)
        }
    }
}

pub fn resolve_upstream(
    config: &Config,
    catalog: &PresetCatalog,
    model: &str,
    credentials: &Credentials,
) -> Result<ResolvedUpstream, AppError> {
    let api_key = credentials.api_key.as_deref().unwrap_or("").trim();
    let endpoint = credentials.endpoint.as_deref().unwrap_or("").trim();

    let server_owned = config.is_access_key(api_key);
    let upstream = if server_owned {
        if !catalog.has_model(model) {
            return Err(AppError::InvalidModel(model.to_string()));
        }
        debug!("Access key accepted, using server upstream for model {model}");
        Upstream {
            base_url: config.openai_base_url.clone(),
            api_key: config.openai_api_key.clone(),
        }
    } else {
        if !endpoint.is_empty()
            && !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(AppError::Validation(
                "endpoint must start with http:// or https://".to_string(),
            ));
        }
        let base_url = if endpoint.is_empty() {
            config.openai_base_url.clone()
        } else {
            endpoint.to_string()
        };
        Upstream {
            base_url,
            api_key: api_key.to_string(),
        }
    };

    if upstream.base_url.is_empty() || upstream.api_key.is_empty() {
        return Err(AppError::Forbidden);
    }

    Ok(ResolvedUpstream {
        upstream,
        server_owned,
    })
}
