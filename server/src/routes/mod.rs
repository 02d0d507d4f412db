//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two JSON endpoints live under `/api`; everything else is served from the
//! public directory (demo page, tenant config JSON, compiled widget bundle).
//! CORS is wide open because the widget is embedded on third-party sites.

pub mod chat;
pub mod health;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed.";

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An HTTP status paired with a client-facing message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat::chat).fallback(method_not_allowed))
        .route("/api/health", get(health::health).fallback(method_not_allowed))
        .with_state(state)
}

/// Full application: API routes, static files from `public_dir`, CORS and
/// request tracing.
pub fn app(state: AppState, public_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_routes(state)
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
