//! Student API handlers

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{Student, StudentId, Submission};
use roster_engine::SubmitOutcome;
use std::sync::Arc;
use tracing::info;

fn parse_id(raw: &str) -> Result<StudentId, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// `POST /student`: create or replace a student.
///
/// The body is decoded here rather than through `Json` so that every
/// malformed body is a 400 regardless of `Content-Type`.
pub async fn submit_student(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let submission: Submission =
        serde_json::from_slice(&body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    let submitted = state.store.submit(submission)?;

    match submitted.outcome {
        SubmitOutcome::Created => info!(id = %submitted.student.id, "Student created"),
        SubmitOutcome::Replaced => info!(id = %submitted.student.id, "Student updated"),
    }
    Ok((StatusCode::CREATED, Json(submitted.student)))
}

/// `GET /student/:id`
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Student>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.store.get(id)?))
}

/// `DELETE /student/:id`: 200 with an empty body.
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.store.delete(id)?;
    info!(id = %id, "Student deleted");
    Ok(StatusCode::OK)
}

/// `GET /topStudent`: empty body when nobody qualifies, else a JSON array.
pub async fn top_student(State(state): State<Arc<AppState>>) -> Response {
    let winners = state.store.top_students();
    if winners.is_empty() {
        return StatusCode::OK.into_response();
    }
    (StatusCode::OK, Json(winners)).into_response()
}
