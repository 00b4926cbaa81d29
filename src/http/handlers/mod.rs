//! Request handlers.
//!
//! Each handler takes the store lock once and holds it for the whole
//! operation, so lookups, id assignment and mutation never interleave with
//! another request.

pub mod cars;
pub mod dealerships;

use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Catch-all for paths no route knows about. Reports the path as sent,
/// before normalization.
pub async fn fallback(method: Method, OriginalUri(uri): OriginalUri) -> (StatusCode, String) {
    tracing::debug!(method = %method, path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        format!("Cannot {} {}", method, uri.path()),
    )
}
