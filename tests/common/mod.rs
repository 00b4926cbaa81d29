//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use dealership_api::config::ServiceConfig;
use dealership_api::http::HttpServer;
use dealership_api::lifecycle::Shutdown;
use serde_json::Value;
use tower::ServiceExt;

/// Configuration with the demo data loaded.
pub fn seeded_config() -> ServiceConfig {
    ServiceConfig::default()
}

/// Configuration starting from an empty store.
pub fn empty_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.store.seed = false;
    config
}

/// Router over the demo data.
pub fn seeded_router() -> Router {
    HttpServer::new(seeded_config()).router()
}

/// Router over an empty store.
pub fn empty_router() -> Router {
    HttpServer::new(empty_config()).router()
}

/// Response status and decoded body (`Value::Null` when the body is empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub raw: Vec<u8>,
}

/// Send one request through the router.
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let raw = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    let body = if raw.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&raw).unwrap_or(Value::Null)
    };

    TestResponse { status, body, raw }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> TestResponse {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn put(router: &Router, uri: &str, body: Value) -> TestResponse {
    send(router, Method::PUT, uri, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::DELETE, uri, None).await
}

/// Start a real server on an ephemeral port.
pub async fn spawn_server(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}
