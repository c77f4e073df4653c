//! Error types for the daybook data-access core.

use crate::types::ErrorId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable error code attached to store failures.
///
/// The vocabulary mirrors the remote document provider's codes; everything
/// the provider does not classify collapses into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    PermissionDenied,
    NetworkRequestFailed,
    Unavailable,
    NotFound,
    Unknown,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::PermissionDenied => "permission-denied",
            ErrorCode::NetworkRequestFailed => "network-request-failed",
            ErrorCode::Unavailable => "unavailable",
            ErrorCode::NotFound => "not-found",
            ErrorCode::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the document store boundary
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Network request failed: {0}")]
    NetworkRequestFailed(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Document not found: {collection}/{id}")]
    DocumentNotFound { collection: String, id: String },

    #[error("Invalid document data: {0}")]
    InvalidData(String),

    #[error("Store I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StoreError {
    /// Classified code for this error, as consumed by the executor and
    /// the error log.
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::PermissionDenied(_) => ErrorCode::PermissionDenied,
            StoreError::NetworkRequestFailed(_) => ErrorCode::NetworkRequestFailed,
            StoreError::Unavailable(_) => ErrorCode::Unavailable,
            StoreError::DocumentNotFound { .. } => ErrorCode::NotFound,
            StoreError::InvalidData(_) | StoreError::IoError(_) => ErrorCode::Unknown,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::InvalidData(err.to_string())
    }
}

impl From<sled::Error> for StoreError {
    fn from(err: sled::Error) -> Self {
        match err {
            sled::Error::Io(io) => StoreError::IoError(io),
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

/// Terminal failure returned by the resilient executor.
///
/// Carries the classified code, the original message, and the id of the
/// error-log record produced for this failure so callers can correlate
/// the two.
#[derive(Debug, Clone, Error)]
#[error("{context}: {message} (code: {code}, log: {})", log_id.as_u64())]
pub struct ExecError {
    pub code: ErrorCode,
    pub message: String,
    pub context: String,
    pub log_id: ErrorId,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}
