//! Axum route handlers for the Proofreading API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::CompletionRequest;
use crate::proofread::prompts::QUICK_PROOFREAD_SYSTEM;
use crate::proofread::upstream::{resolve_upstream, Credentials};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompletionPayload {
    pub model: String,
    pub context: String,
    pub instruction: String,
    /// The user's text to proofread.
    pub prompt: String,
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Debug, Deserialize)]
pub struct QuickProofreadPayload {
    pub prompt: String,
    /// Defaults to the first catalog model.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub completion: String,
    pub model: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/completion
///
/// Proofreads `prompt` with the system prompt composed from `context` and
/// `instruction`. Invalid preset keys are rejected before any upstream call.
pub async fn handle_completion(
    State(state): State<AppState>,
    Json(payload): Json<CompletionPayload>,
) -> Result<Json<CompletionResponse>, AppError> {
    if payload.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }
    if payload.model.trim().is_empty() {
        return Err(AppError::Validation("model cannot be empty".to_string()));
    }

    let system = state
        .composer
        .compose(&payload.context, &payload.instruction)?;

    let resolved = resolve_upstream(
        &state.config,
        state.composer.catalog(),
        &payload.model,
        &payload.credentials,
    )?;

    info!(
        "Proofreading {} chars with model={} context={} instruction={}",
        payload.prompt.len(),
        payload.model,
        payload.context,
        payload.instruction
    );

    let request = CompletionRequest {
        model: payload.model,
        system: Some(system),
        prompt: payload.prompt,
        ..Default::default()
    };

    let completion = state
        .completions
        .complete(&resolved.upstream, &request)
        .await
        .map_err(|e| resolved.error(e))?;

    Ok(Json(CompletionResponse {
        completion: completion.text,
        model: completion.model,
    }))
}

/// POST /api/proofread
///
/// Proofreads `prompt` with a fixed editor persona; no presets involved.
pub async fn handle_quick_proofread(
    State(state): State<AppState>,
    Json(payload): Json<QuickProofreadPayload>,
) -> Result<Json<CompletionResponse>, AppError> {
    if payload.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let model = payload
        .model
        .filter(|m| !m.trim().is_empty())
        .or_else(|| state.composer.catalog().models().first().cloned())
        .unwrap_or_default();

    let resolved = resolve_upstream(
        &state.config,
        state.composer.catalog(),
        &model,
        &payload.credentials,
    )?;

    let request = CompletionRequest {
        model,
        system: Some(QUICK_PROOFREAD_SYSTEM.to_string()),
        prompt: payload.prompt,
        ..Default::default()
    };

    let completion = state
        .completions
        .complete(&resolved.upstream, &request)
        .await
        .map_err(|e| resolved.error(e))?;

    Ok(Json(CompletionResponse {
        completion: completion.text,
        model: completion.model,
    }))
}
