//! Analyze API endpoints
//!
//! The handlers hold no algorithmic content; they validate the boundary and
//! delegate to the shared scorer.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

use crate::error::ShieldError;
use crate::scoring::ScamScorer;

/// Shared application state
pub struct AppState {
    pub scorer: ScamScorer,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// POST /api/analyze - score a solicitation text
///
/// Body: `{"text": "..."}`. Missing, non-string, or empty text is a 400 with
/// `{"error": "Missing text"}`; anything unexpected is a 500 with
/// `{"error": "Server error"}`.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> impl IntoResponse {
    let text = body
        .as_ref()
        .and_then(|Json(v)| v.get("text"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    let text = match text {
        Some(t) => t,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("Missing text")),
            )
                .into_response();
        }
    };

    match state.scorer.score(&text) {
        Ok(verdict) => (StatusCode::OK, Json(verdict)).into_response(),
        Err(ShieldError::InvalidInput(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("Missing text")),
        )
            .into_response(),
        Err(e) => {
            error!("Analysis failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Server error")),
            )
                .into_response()
        }
    }
}
