//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Export filename must be a bare file name: {0}")]
    InvalidFilename(String),

    #[error("Invalid MIME type: {0}")]
    InvalidMimeType(String),

    #[error("Copy confirmation window must be greater than zero")]
    InvalidConfirmationWindow,

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
