pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::presets::handlers as presets;
use crate::proofread::handlers as proofread;
use crate::state::AppState;
use crate::writing::handlers as writing;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Presets
        .route("/api/presets", get(presets::handle_list_presets))
        .route("/api/system-prompt", get(presets::handle_system_prompt))
        // Proofreading
        .route("/api/completion", post(proofread::handle_completion))
        .route("/api/proofread", post(proofread::handle_quick_proofread))
        // Writing helpers
        .route("/api/generate", post(writing::handle_generate_article))
        .route("/api/humanize", post(writing::handle_humanize))
        .with_state(state)
}
