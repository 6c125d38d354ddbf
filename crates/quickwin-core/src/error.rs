//! Error types for quickwin-core.
//!
//! Only two operations in the library can fail: loading or changing
//! configuration, and validating captured input. Each gets its own enum;
//! everything else reports through return values.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors for caller-side input checks.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Title is empty after trimming
    #[error("Title must not be empty")]
    EmptyTitle,

    /// Duration is not a positive number of minutes
    #[error("Invalid duration '{value}': {message}")]
    InvalidDuration { value: String, message: String },
}
