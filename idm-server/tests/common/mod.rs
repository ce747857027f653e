#![allow(dead_code)]

//! Test infrastructure for idm-server API tests

use idm_auth::{CredentialHasher, SystemClock, TokenIssuer};
use idm_server::{AppState, build_router};

use std::sync::Arc;

use axum::body::Body;
use axum::response::Response;
use http::Request;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes!";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/idm-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        issuer: Arc::new(TokenIssuer::with_hs256(TEST_SECRET, Arc::new(SystemClock))),
        hasher: Arc::new(CredentialHasher::new()),
    }
}

/// Drive one request through a fresh router over the shared state
pub async fn send(state: &AppState, request: Request<Body>) -> Response {
    build_router(state.clone())
        .oneshot(request)
        .await
        .expect("Request failed")
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub async fn response_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).expect("Response body is not JSON")
}

pub fn alice_signup() -> serde_json::Value {
    serde_json::json!({
        "email": "alice89@example.com",
        "name": "Alice",
        "phone": "+79998887766",
        "password": "150689",
    })
}

pub fn bob_signup() -> serde_json::Value {
    serde_json::json!({
        "email": "bob@gmail.com",
        "name": "Bob",
        "phone": "+15550001122",
        "password": "bob-password",
    })
}

/// Sign Alice up and return her access token
pub async fn signup_alice(state: &AppState) -> String {
    let response = send(state, json_request("POST", "/auth/signup", &alice_signup())).await;
    assert_eq!(response.status(), http::StatusCode::CREATED);

    let json = response_json(response).await;
    json["accessToken"].as_str().unwrap().to_string()
}
