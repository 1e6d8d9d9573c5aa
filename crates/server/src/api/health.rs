//! Liveness probe

use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// `GET /health`: status and number of stored students.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "status": "ok", "students": state.store.len() }))
}
