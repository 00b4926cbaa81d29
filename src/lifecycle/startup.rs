//! Startup orchestration.
//!
//! # Responsibilities
//! - Install the metrics recorder when enabled
//! - Build the store and router
//! - Bind the listener and serve until a termination signal arrives

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("Failed to install metrics recorder: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the service and block until it has shut down.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let address = config.listener.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_termination().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;
    Ok(())
}
