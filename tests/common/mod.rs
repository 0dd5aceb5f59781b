//! Shared fixtures for the API tests: an in-memory application and a few
//! request helpers driving the router directly through `tower::ServiceExt`.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use laplogger::auth::tokens::JwtKeys;
use laplogger::database;
use laplogger::routes::router::create_router;
use laplogger::server::state::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

/// In-memory database with schema and seed data applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("options")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory database");
    database::create_tables(&pool).await.expect("schema");
    database::seed_reference_data(&pool).await.expect("seed");
    pool
}

/// A full application over a fresh in-memory database.
pub async fn test_app() -> Router {
    let state = AppState {
        db: test_pool().await,
        jwt: JwtKeys::new(TEST_SECRET.as_bytes()),
    };
    create_router(state, "http://localhost:3000")
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

pub async fn post_json_auth(
    app: &Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .header("authorization", format!("Bearer {token}"))
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

/// GET with an arbitrary Authorization header value, or none.
pub async fn get_with_header(
    app: &Router,
    uri: &str,
    auth_header: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = auth_header {
        builder = builder.header("authorization", value);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

pub async fn get_with_token(app: &Router, uri: &str, token: &str) -> Response<Body> {
    get_with_header(app, uri, Some(&format!("Bearer {token}"))).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Register a user and return the issued token.
pub async fn register_user(app: &Router, username: &str, email: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/auth/register",
        serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        }),
    )
    .await;
    assert!(response.status().is_success(), "registration failed");

    body_json(response).await["token"]
        .as_str()
        .expect("token in response")
        .to_string()
}
