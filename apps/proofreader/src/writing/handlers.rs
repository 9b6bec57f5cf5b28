//! Axum route handlers for the writing helpers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::CompletionRequest;
use crate::proofread::upstream::{resolve_upstream, Credentials};
use crate::state::AppState;
use crate::writing::prompts::{
    article_system_prompt, article_user_prompt, ArticleLength, ArticleStyle,
    GENERATION_TEMPERATURE, GENERATION_TOP_P, HUMANIZE_MAX_TOKENS, HUMANIZE_PROMPT_TEMPLATE,
};

#[derive(Debug, Deserialize)]
pub struct GenerateArticleRequest {
    pub topic: String,
    pub length: ArticleLength,
    pub style: ArticleStyle,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Debug, Serialize)]
pub struct GenerateArticleResponse {
    pub article: String,
}

#[derive(Debug, Deserialize)]
pub struct HumanizeRequest {
    pub prompt: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(flatten)]
    pub credentials: Credentials,
}

#[derive(Debug, Serialize)]
pub struct HumanizeResponse {
    pub text: String,
}

/// Requested model, or the first catalog model when none was given.
fn model_or_default(state: &AppState, model: Option<String>) -> String {
    model
        .filter(|m| !m.trim().is_empty())
        .or_else(|| state.composer.catalog().models().first().cloned())
        .unwrap_or_default()
}

/// POST /api/generate
pub async fn handle_generate_article(
    State(state): State<AppState>,
    Json(request): Json<GenerateArticleRequest>,
) -> Result<Json<GenerateArticleResponse>, AppError> {
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }

    let model = model_or_default(&state, request.model);
    let resolved = resolve_upstream(
        &state.config,
        state.composer.catalog(),
        &model,
        &request.credentials,
    )?;

    let completion = state
        .completions
        .complete(
            &resolved.upstream,
            &CompletionRequest {
                model,
                system: Some(article_system_prompt(request.style)),
                prompt: article_user_prompt(request.topic.trim(), request.length),
                max_tokens: Some(request.length.max_tokens()),
                temperature: Some(GENERATION_TEMPERATURE),
                top_p: Some(GENERATION_TOP_P),
            },
        )
        .await
        .map_err(|e| resolved.error(e))?;

    Ok(Json(GenerateArticleResponse {
        article: completion.text,
    }))
}

/// POST /api/humanize
pub async fn handle_humanize(
    State(state): State<AppState>,
    Json(request): Json<HumanizeRequest>,
) -> Result<Json<HumanizeResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let model = model_or_default(&state, request.model);
    let resolved = resolve_upstream(
        &state.config,
        state.composer.catalog(),
        &model,
        &request.credentials,
    )?;

    let completion = state
        .completions
        .complete(
            &resolved.upstream,
            &CompletionRequest {
                model,
                system: None,
                prompt: HUMANIZE_PROMPT_TEMPLATE.replace("{text}", &request.prompt),
                max_tokens: Some(HUMANIZE_MAX_TOKENS),
                temperature: Some(GENERATION_TEMPERATURE),
                top_p: Some(GENERATION_TOP_P),
            },
        )
        .await
        .map_err(|e| resolved.error(e))?;

    Ok(Json(HumanizeResponse {
        text: completion.text,
    }))
}
