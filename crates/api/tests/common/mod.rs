//! Shared helpers for HTTP-level integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use sitebook_api::config::ServerConfig;
use sitebook_api::middleware::actor::ACTING_USER_HEADER;
use sitebook_api::router::build_app_router;
use sitebook_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, uri, body, None).await
}

/// POST `body` on behalf of `user_id`.
pub async fn post_json_as(app: Router, uri: &str, user_id: i64, body: Value) -> Response<Body> {
    send_json(app, uri, body, Some(user_id)).await
}

async fn send_json(app: Router, uri: &str, body: Value, user_id: Option<i64>) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(id) = user_id {
        builder = builder.header(ACTING_USER_HEADER, id.to_string());
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers (go through the API so the full stack is exercised)
// ---------------------------------------------------------------------------

pub async fn create_project(pool: &PgPool, budget: Option<&str>) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        json!({
            "name": "Gedung Kantor",
            "location": "Bandung",
            "start_date": "2026-01-05T00:00:00Z",
            "status": "active",
            "budget": budget,
        }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

pub async fn create_user(pool: &PgPool, email: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        json!({ "email": email, "name": "Tester" }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

pub async fn create_company(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/companies",
        json!({ "name": name }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
