//! HTTP scenarios against a shared store

use crate::common::*;
use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;

#[tokio::test]
async fn http_writes_are_visible_in_store() {
    let store = Arc::new(StudentStore::new());
    let app = app_over(Arc::clone(&store));

    let body = json!({ "id": null, "name": "Катя", "marks": [2, 3, 4] }).to_string();
    let (status, bytes) = call(&app, Method::POST, "/student", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);

    let created: Value = serde_json::from_slice(&bytes).unwrap();
    let id = StudentId::new(created["id"].as_i64().unwrap());
    assert_eq!(store.get(id).unwrap().name, "Катя");
}

#[tokio::test]
async fn store_writes_are_visible_over_http() {
    let store = Arc::new(seeded_store(&[
        (101, &[4, 4, 4]),
        (102, &[4, 4, 4]),
        (103, &[2, 2, 2]),
    ]));
    let app = app_over(store);

    let (status, bytes) = call(&app, Method::GET, "/topStudent", None).await;
    assert_eq!(status, StatusCode::OK);

    let winners: Vec<Student> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(ids(&winners), vec![101, 102]);
}

#[tokio::test]
async fn full_lifecycle_over_http() {
    let store = Arc::new(StudentStore::new());
    let app = app_over(Arc::clone(&store));

    let create = json!({ "id": 2, "name": "Иван", "marks": [2, 3, 4] }).to_string();
    assert_eq!(
        call(&app, Method::POST, "/student", Some(create)).await.0,
        StatusCode::CREATED
    );
    assert_eq!(call(&app, Method::GET, "/student/2", None).await.0, StatusCode::OK);
    assert_eq!(call(&app, Method::DELETE, "/student/2", None).await.0, StatusCode::OK);
    assert_eq!(
        call(&app, Method::DELETE, "/student/2", None).await.0,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        call(&app, Method::GET, "/student/2", None).await.0,
        StatusCode::NOT_FOUND
    );

    let (status, bytes) = call(&app, Method::GET, "/topStudent", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(bytes.is_empty());
    assert!(store.is_empty());
}
