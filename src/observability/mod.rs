//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (request counters, latency histograms, store gauges)
//!
//! Consumers:
//!     → stdout (tracing fmt layer)
//!     → Metrics endpoint (Prometheus scrape, when enabled)
//! ```
//!
//! # Design Decisions
//! - Structured logging with key/value fields
//! - Request ID flows through the trace span of every request
//! - Metrics are cheap (atomic increments) and no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
