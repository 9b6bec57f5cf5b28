//! Axum route handlers for the preset catalog.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::presets::catalog::RenderMode;
use crate::presets::selection::{
    MemoryStore, Selection, CONTEXT_KEY, INSTRUCTION_KEY, MODEL_KEY,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// A client's stored selection, sent back so the server can repair stale keys.
#[derive(Debug, Default, Deserialize)]
pub struct StoredSelectionQuery {
    pub model: Option<String>,
    pub context: Option<String>,
    pub instruction: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextView {
    pub key: String,
    pub label: String,
    pub render_mode: RenderMode,
    pub uses_instruction: bool,
}

#[derive(Debug, Serialize)]
pub struct InstructionView {
    pub key: String,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct PresetsResponse {
    pub models: Vec<String>,
    pub contexts: Vec<ContextView>,
    pub instructions: Vec<InstructionView>,
    pub defaults: Selection,
    /// The caller's stored selection with unknown keys replaced by defaults.
    pub selection: Selection,
}

#[derive(Debug, Deserialize)]
pub struct SystemPromptQuery {
    pub context: String,
    pub instruction: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemPromptResponse {
    pub system_prompt: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/presets
///
/// Lists models, contexts, and instructions in display order. Accepts the
/// caller's stored selection as query parameters and returns it repaired.
pub async fn handle_list_presets(
    State(state): State<AppState>,
    Query(stored): Query<StoredSelectionQuery>,
) -> Json<PresetsResponse> {
    let catalog = state.composer.catalog();

    let store = MemoryStore::seeded([
        (MODEL_KEY, stored.model.as_deref()),
        (CONTEXT_KEY, stored.context.as_deref()),
        (INSTRUCTION_KEY, stored.instruction.as_deref()),
    ]);

    Json(PresetsResponse {
        models: catalog.models().to_vec(),
        contexts: catalog
            .contexts()
            .iter()
            .map(|c| ContextView {
                key: c.key.clone(),
                label: c.label.clone(),
                render_mode: c.render_mode,
                uses_instruction: c.uses_instruction(),
            })
            .collect(),
        instructions: catalog
            .instructions()
            .iter()
            .map(|i| InstructionView {
                key: i.key.clone(),
                prompt: i.prompt.clone(),
            })
            .collect(),
        defaults: Selection::defaults(catalog),
        selection: Selection::restore(&store, catalog),
    })
}

/// GET /api/system-prompt?context=..&instruction=..
///
/// Previews the system prompt a proofread request with these keys would use.
pub async fn handle_system_prompt(
    State(state): State<AppState>,
    Query(query): Query<SystemPromptQuery>,
) -> Result<Json<SystemPromptResponse>, AppError> {
    let system_prompt = state.composer.compose(&query.context, &query.instruction)?;
    Ok(Json(SystemPromptResponse { system_prompt }))
}
