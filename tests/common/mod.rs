//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
pub use roster::{Student, StudentId, StudentStore, Submission};
use std::sync::Arc;
use tower::ServiceExt;

/// Seed a store with `(id, marks)` pairs, names derived from the id.
pub fn seeded_store(students: &[(i64, &[i32])]) -> StudentStore {
    let store = StudentStore::new();
    for (id, marks) in students {
        store
            .submit(Submission::with_id(*id, format!("student-{}", id), marks.to_vec()))
            .unwrap();
    }
    store
}

/// Ids of `students`, in order.
pub fn ids(students: &[Student]) -> Vec<i64> {
    students.iter().map(|s| s.id.get()).collect()
}

/// Router over a shared store, so tests can inspect the store directly.
pub fn app_over(store: Arc<StudentStore>) -> Router {
    roster::router(Arc::new(roster::AppState::new(store)))
}

/// Send one request and collect the body.
pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Bytes) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}
