//! Unified error types for syshealth
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the metrics provider
    #[error("Metrics provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from configuration parsing
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from log store initialization or appends
    #[error("Log store error: {0}")]
    Store(#[from] StoreError),

    /// JSON serialization error (CLI output)
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the host metrics provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The platform is not supported by the metrics backend
    #[error("Host metrics are not supported on this platform")]
    Unsupported,

    /// A reading could not be taken
    #[error("Metric '{metric}' unavailable: {reason}")]
    Unavailable { metric: String, reason: String },
}

/// Errors from configuration parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Value could not be parsed as a number
    #[error("Invalid numeric value for '{key}': {value:?}")]
    InvalidNumber { key: String, value: String },

    /// Value parsed but cannot be used
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the log store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Log directory could not be created
    #[error("Failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Log file could not be created or opened
    #[error("Failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Write to a log file failed
    #[error("Failed to write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record could not be serialized
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from a single notification attempt
///
/// These never abort the pipeline; the notification manager logs them.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Command is not on PATH
    #[error("Command not available: {0}")]
    CommandUnavailable(String),

    /// Command could not be spawned or fed
    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Command ran but reported failure
    #[error("'{program}' exited with {status}")]
    CommandFailed { program: String, status: String },

    /// Echoing the message to the terminal failed
    #[error("Failed to echo to terminal: {0}")]
    Echo(#[source] std::io::Error),

    /// SMTP transport-level failure (connection, TLS, authentication)
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Sender or recipient address could not be parsed
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled
    #[error("Email build error: {0}")]
    Build(String),

    /// A fallback chain was built without any notifier
    #[error("No notification channels configured")]
    NoChannels,
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
