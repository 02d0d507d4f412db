//! Health route — `GET /api/health`.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// `GET /api/health`: liveness probe. Does not touch the upstream model.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
