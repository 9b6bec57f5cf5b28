use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionService;
use crate::presets::{PresetCatalog, PromptComposer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owns the catalog built at startup from `Config::models` and the built-in
    /// preset tables; handlers read it through `composer.catalog()`.
    pub composer: PromptComposer,
    /// Pluggable completion backend. Default: `LlmClient` over HTTP.
    pub completions: Arc<dyn CompletionService>,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: PresetCatalog,
        completions: Arc<dyn CompletionService>,
    ) -> Self {
        Self {
            config,
            composer: PromptComposer::new(Arc::new(catalog)),
            completions,
        }
    }
}
