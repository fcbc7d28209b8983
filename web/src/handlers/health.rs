//! Liveness and readiness probes.

use crate::error::AppError;
use crate::WebResult;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde::Serialize;

/// Probe response body.
#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    /// "healthy" or "ready".
    pub status: &'static str,
}

/// `GET /health` — process is up.
pub async fn health_check() -> Json<ProbeResponse> {
    Json(ProbeResponse { status: "healthy" })
}

/// `GET /ready` — the backing store answers queries.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> WebResult<Json<ProbeResponse>> {
    state
        .catalog
        .list()
        .await
        .map_err(|e| AppError::unavailable("Store not reachable").with_source(e.into()))?;
    Ok(Json(ProbeResponse { status: "ready" }))
}
