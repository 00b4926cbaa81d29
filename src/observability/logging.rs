//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins; otherwise the configured level applies to this crate
//!   and to tower-http

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is not set.
pub fn default_directive(log_level: &str) -> String {
    let level = log_level.to_lowercase();
    format!("dealership_api={level},tower_http={level}")
}

/// Install the global tracing subscriber.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
