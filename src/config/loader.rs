//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `listener.port`.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse configuration from TOML text without validating it.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Build the effective configuration.
///
/// Starts from defaults, layers the TOML file if one is given, then applies
/// the `PORT` environment variable and validates the result.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&content)?
        }
        None => ServiceConfig::default(),
    };

    apply_port_override(&mut config, std::env::var(PORT_ENV).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply a `PORT` override. Empty values are ignored.
pub fn apply_port_override(
    config: &mut ServiceConfig,
    value: Option<String>,
) -> Result<(), ConfigError> {
    let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(());
    };
    config.listener.port = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
    Ok(())
}
