mod config;
mod errors;
mod llm_client;
mod presets;
mod proofread;
mod routes;
mod state;
mod writing;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::presets::PresetCatalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Proofreader API v{}", env!("CARGO_PKG_VERSION"));

    // Preset catalog is fixed for the lifetime of the process
    let catalog = PresetCatalog::new(config.models.clone())?;
    info!(
        "Preset catalog loaded: {} models, {} contexts, {} instructions",
        catalog.models().len(),
        catalog.contexts().len(),
        catalog.instructions().len()
    );

    // Initialize LLM client
    let llm = LlmClient::new(Duration::from_secs(config.request_timeout_secs))?;
    info!("LLM client initialized (upstream: {})", config.openai_base_url);
    if config.openai_api_key.is_empty() {
        info!("OPENAI_API_KEY not set; only requests with their own API key will be served");
    }

    let state = AppState::new(config.clone(), catalog, Arc::new(llm));

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
