//! Core error types for speedrun-core.
//!
//! Every engine-level failure is local and recoverable; nothing here
//! terminates the process. Operations return a named failure and the
//! caller decides presentation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for speedrun-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timer collection errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Share token errors
    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Persistence errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Notification dispatch errors
    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Timer collection errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The collection is at capacity; the create was rejected.
    #[error("maximum {} timers allowed", crate::timer::MAX_TIMERS)]
    LimitReached,

    /// No record with the given id.
    #[error("no timer with id {0}")]
    NotFound(u64),
}

/// Share token decode errors. Any of these means the token is
/// malformed share data; none of them escape as a panic.
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("malformed share data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("malformed share data: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),

    #[error("malformed share data: expected 3 fields, got {0}")]
    FieldCount(usize),

    #[error("malformed share data: '{0}' is not a number")]
    BadNumber(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Persistence errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Query failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Notification dispatch errors. A timer keeps running and keeps its
/// threshold bookkeeping even when dispatch is impossible.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyError {
    #[error("notifications are not supported in this environment")]
    Unsupported,

    #[error("notification permission denied")]
    PermissionDenied,
}

/// Advisory warning for names over the soft length recommendation.
/// Never blocks the mutation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("name is {len} chars; keep it under {limit}")]
pub struct ValidationWarning {
    pub len: usize,
    pub limit: usize,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
