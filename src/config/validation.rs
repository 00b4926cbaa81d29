//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Check that addresses parse before anything binds them
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::ServiceConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("limits.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),

    #[error("observability.log_level '{0}' is not a known level")]
    UnknownLogLevel(String),
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }
    if !LOG_LEVELS.contains(&observability.log_level.to_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
