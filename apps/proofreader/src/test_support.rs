//! Shared fixtures for handler tests: a recording completion stub and router helpers.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::config::test_config;
use crate::llm_client::{Completion, CompletionRequest, CompletionService, LlmError, Upstream};
use crate::presets::catalog::test_catalog;
use crate::routes::build_router;
use crate::state::AppState;

/// Records every call and answers with a canned reply (or a canned error status).
#[derive(Default)]
pub struct StubCompletions {
    pub calls: Mutex<Vec<(Upstream, CompletionRequest)>>,
    pub fail_with: Option<u16>,
}

#[async_trait]
impl CompletionService for StubCompletions {
    async fn complete(
        &self,
        upstream: &Upstream,
        request: &CompletionRequest,
    ) -> Result<Completion, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((upstream.clone(), request.clone()));

        if let Some(status) = self.fail_with {
            return Err(LlmError::Api {
                status,
                message: "stub failure".to_string(),
            });
        }

        Ok(Completion {
            text: format!("revised: {}", request.prompt),
            model: request.model.clone(),
            usage: None,
        })
    }
}

pub struct TestApp {
    pub state: AppState,
    pub stub: Arc<StubCompletions>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_stub(StubCompletions::default())
    }

    pub fn with_stub(stub: StubCompletions) -> Self {
        let stub = Arc::new(stub);
        let state = AppState::new(test_config(), test_catalog(), stub.clone());
        Self { state, stub }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn calls(&self) -> Vec<(Upstream, CompletionRequest)> {
        self.stub.calls.lock().unwrap().clone()
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        // Axum's own extractor rejections are plain text.
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

pub async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}
