//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Cache TTL must be greater than zero")]
    InvalidCacheTtl,

    #[error("Cache TTL cannot exceed {max_secs} seconds")]
    CacheTtlTooLong { max_secs: u64 },

    #[error("Intent path cannot be empty")]
    EmptyIntentPath,

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),

    #[error("Rule catalog path cannot be empty")]
    EmptyRulesPath,
}
