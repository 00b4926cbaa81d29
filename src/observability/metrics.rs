//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dealership_api_requests_total` (counter): requests by method, route, status
//! - `dealership_api_request_duration_seconds` (histogram): latency by method, route
//! - `dealership_api_dealerships` (gauge): dealerships in the store
//! - `dealership_api_cars` (gauge): cars across all dealerships
//!
//! # Design Decisions
//! - Route label is the matched route template, not the raw path, to keep
//!   label cardinality bounded
//! - Unmatched requests share the `unmatched` route label

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::store::Store;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Middleware recording a counter and latency sample for every request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    record_request(&method, &route, response.status().as_u16(), start_time);
    response
}

pub fn record_request(method: &str, route: &str, status: u16, start_time: Instant) {
    let duration = start_time.elapsed().as_secs_f64();

    metrics::counter!(
        "dealership_api_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "dealership_api_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(duration);
}

pub fn record_store_size(store: &Store) {
    metrics::gauge!("dealership_api_dealerships").set(store.dealerships().len() as f64);
    metrics::gauge!("dealership_api_cars").set(store.car_count() as f64);
}
