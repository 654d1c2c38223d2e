//! HTTP Handlers

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
};
use platform_core::{ChatReply, ChatRequest};
use serde::Serialize;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, code: Option<&str>, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.map(str::to_owned),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        model: state.model.to_string(),
    })
}

/// Demo chat endpoint.
///
/// A body that is not a JSON chat request gets a `500` with a JSON error
/// object, never axum's plain-text rejection.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, ApiError> {
    let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected chat body: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, Some("INVALID_BODY"), e.to_string())
    })?;

    let reply = state
        .replies
        .compose(&request.message, &mut rand::thread_rng());

    tracing::debug!(
        prompt_chars = request.message.chars().count(),
        tokens_used = reply.tokens_used,
        "Answered chat message"
    );

    Ok(Json(ChatReply {
        response: Some(reply.text),
        model: Some(state.model.to_string()),
        tokens_used: Some(reply.tokens_used),
    }))
}

/// Bare `OPTIONS` that is not a CORS preflight (the CORS layer answers those)
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on the chat route; the body is `{"error": "Method not allowed"}`
pub async fn method_not_allowed() -> ApiError {
    api_error(StatusCode::METHOD_NOT_ALLOWED, None, "Method not allowed")
}
