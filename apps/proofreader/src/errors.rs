use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::presets::PromptError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Invalid model '{0}'")]
    InvalidModel(String),

    #[error("Invalid API key or endpoint")]
    Forbidden,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Failure of the server's own upstream; its details stay in the logs.
    #[error("LLM error on server upstream: {0}")]
    ServerLlm(LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Prompt(e) => {
                let code = match e {
                    PromptError::InvalidContextKey(_) => "INVALID_CONTEXT_KEY",
                    PromptError::InvalidInstructionKey(_) => "INVALID_INSTRUCTION_KEY",
                };
                (StatusCode::BAD_REQUEST, code, e.to_string())
            }
            AppError::InvalidModel(_) => (
                StatusCode::BAD_REQUEST,
                "INVALID_MODEL",
                "Invalid model, Please provide your own api when using a custom model".to_string(),
            ),
            AppError::Forbidden => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Invalid API key or endpoint".to_string(),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                let message = match e {
                    // Upstream rejections (bad key, unknown model) are actionable for the caller.
                    LlmError::Api { status, message } if *status < 500 && *status != 429 => {
                        format!("Upstream rejected the request ({status}): {message}")
                    }
                    _ => "An AI processing error occurred".to_string(),
                };
                (StatusCode::BAD_GATEWAY, "LLM_ERROR", message)
            }
            AppError::ServerLlm(e) => {
                tracing::error!("LLM error on server upstream: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
