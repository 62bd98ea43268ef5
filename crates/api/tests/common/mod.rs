//! Common test utilities for integration tests.
//!
//! Every test builds its own seeded store and router, so tests never share
//! state and can run in parallel.

// Not every helper is used by every test binary.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use flexfit_api::{
    app::create_app,
    config::{Config, LoggingConfig, SecurityConfig, ServerConfig},
};
use persistence::{create_store, MemoryStore, StoreConfig};
use tower::ServiceExt;

/// Seeded demo member id; the demo member is the only seeded user.
pub const DEMO_USER_ID: i64 = 1;

/// Test configuration with rate limiting disabled.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            request_timeout_secs: 30,
            max_body_size: 1048576,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            cors_origins: vec![],
            rate_limit_per_minute: 0,
            trusted_proxies: vec![],
            hsts_enabled: false,
        },
        store: test_store_config(),
    }
}

pub fn test_store_config() -> StoreConfig {
    StoreConfig {
        seed_demo_data: true,
        demo_username: "member".to_string(),
        demo_password: "test-password".to_string(),
        demo_name: "Test Member".to_string(),
        demo_email: "member@example.com".to_string(),
    }
}

/// A store seeded with the demo catalog.
pub async fn create_test_store() -> MemoryStore {
    create_store(&test_store_config())
        .await
        .expect("Failed to seed test store")
}

/// Create a test application router over `store`.
pub fn create_test_app(config: Config, store: MemoryStore) -> Router {
    create_app(config, store)
}

/// Router over a freshly seeded store, plus the store for direct checks.
pub async fn seeded_app() -> (Router, MemoryStore) {
    let store = create_test_store().await;
    (create_test_app(test_config(), store.clone()), store)
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a POST request with a raw, possibly malformed body.
pub fn raw_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request through a clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}
