//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs, `--config <path>`)
//!     → PORT environment override (loader.rs)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    LimitsConfig, ListenerConfig, ObservabilityConfig, ServiceConfig, StoreConfig, TimeoutConfig,
};
