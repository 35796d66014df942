use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::{AppState, VersionInfo};

/// GET /health - liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// GET /version - version of the running server.
pub async fn version(State(state): State<AppState>) -> Json<VersionInfo> {
    Json(state.version.as_ref().clone())
}
