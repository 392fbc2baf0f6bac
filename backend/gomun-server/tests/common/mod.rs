#![allow(dead_code)]

//! Test infrastructure for gomun-server API tests

use gomun_auth::MockTokenIssuer;
use gomun_server::{AppState, build_router};
use gomun_store::{ProfileStore, UserStore};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// AppState backed by the demo seed data
pub fn create_seeded_app_state() -> AppState {
    AppState::new(
        UserStore::seeded(),
        ProfileStore::seeded(),
        Arc::new(MockTokenIssuer::default()),
    )
}

/// AppState with no users or profiles
pub fn create_empty_app_state() -> AppState {
    AppState::new(
        UserStore::new(),
        ProfileStore::new(),
        Arc::new(MockTokenIssuer::default()),
    )
}

pub fn create_test_router() -> Router {
    build_router(create_seeded_app_state())
}

/// Send a request with an optional JSON body and return status + parsed body
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
    };

    (status, json)
}
