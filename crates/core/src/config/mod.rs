//! Engine configuration: types, loading, and validation.

mod loader;
mod types;
mod validate;

pub use loader::{load_config, load_config_from_str};
pub use types::Config;
pub use validate::validate_config;

use thiserror::Error;

/// Error type for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("config file not found: {0}")]
    FileNotFound(String),

    /// Config could not be parsed.
    #[error("failed to parse config: {0}")]
    ParseError(String),

    /// Config parsed but failed a cross-field check.
    #[error("invalid config: {0}")]
    ValidationError(String),
}
