//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

/// Simple health check response for liveness probes.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Always reports `ok`; does not contact the provider.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
