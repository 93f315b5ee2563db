//! Unified error types for vwise.
//!
//! This module provides a clean error type that wraps the layer errors
//! and presents a consistent interface to users.

use thiserror::Error;
use vwise_core::ConfigError;

/// All vwise errors.
///
/// This is the canonical error type for operations on [`Vwise`](crate::Vwise).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Missing or unusable input (blank id, unresolvable version)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Workspace not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Workspace state forbids the operation (removed)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Malformed or unreadable configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Operation not offered by this access path
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Denied by the authorization hook
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Remote call failed
    #[error("transport error: {0}")]
    Transport(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for vwise operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }

    /// Check if this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is an unsupported-operation error.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }

    /// Check if this is a serious/unrecoverable error.
    pub fn is_serious(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

// Convert from internal core errors
impl From<vwise_core::Error> for Error {
    fn from(e: vwise_core::Error) -> Self {
        use vwise_core::Error as CoreError;
        match e {
            CoreError::InvalidArgument(msg) => Error::InvalidArgument(msg),
            CoreError::NotFound(msg) => Error::NotFound(msg),
            CoreError::Conflict(msg) => Error::Conflict(msg),
            CoreError::Configuration(e) => Error::Configuration(e.to_string()),
            CoreError::Unsupported(msg) => Error::Unsupported(msg),
            // decode failures only reach callers through malformed input
            CoreError::Decode(e) => Error::InvalidArgument(e.to_string()),
            CoreError::Unauthorized(msg) => Error::Unauthorized(msg),
            CoreError::Transport(msg) => Error::Transport(msg),
            CoreError::Internal(msg) => Error::Internal(msg),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Configuration(e.to_string())
    }
}
