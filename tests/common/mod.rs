//! Shared helpers for the HTTP integration tests
//!
//! Each test builds a full router over a fresh in-memory SQLite store and
//! drives it with `tower::ServiceExt::oneshot`; no sockets are opened.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use todovault::auth::tokens::TokenService;
use todovault::db::Database;
use todovault::routes::router::create_router;
use todovault::server::state::AppState;

/// Signing secret shared by the app under test and token helpers
pub const TEST_SECRET: &str = "integration-test-secret";

/// Build an app over a fresh in-memory store
pub async fn test_app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let tokens = TokenService::new(TEST_SECRET);
    create_router(AppState { db, tokens })
}

/// A token service sharing the app's secret, for decoding and forging
pub fn token_service() -> TokenService {
    TokenService::new(TEST_SECRET)
}

/// Send a request and collect the response as (status, parsed JSON body)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Register a user and return (token, user object)
pub async fn register_user(app: &Router, username: &str) -> (String, Value) {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "password123",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    (
        body["token"].as_str().unwrap().to_string(),
        body["user"].clone(),
    )
}

/// Create a todo and return its JSON representation
pub async fn create_todo(app: &Router, token: &str, title: &str, description: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/todos",
        Some(token),
        Some(serde_json::json!({
            "title": title,
            "description": description,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "todo creation failed: {body}");
    body["todo"].clone()
}
