//! Error types for the workspace store
//!
//! [`Error`] is the canonical failure type returned by every repository
//! operation. Lookup misses are not errors: they are reported as `Ok(None)`.
//!
//! ## Error Codes (Canonical)
//!
//! | Code | Description |
//! |------|-------------|
//! | InvalidArgument | Missing id/version, or a baseline version that resolves to nothing |
//! | NotFound | Update targeting an unknown (or purged) workspace |
//! | Conflict | Update targeting a removed workspace |
//! | Configuration | Malformed id codec configuration |
//! | Unsupported | Operation not available through this repository |
//! | Decode | Identifier could not be decoded |
//! | Unauthorized | Denied by the authorization hook |
//! | Transport | Remote call failed before producing a response |
//! | Internal | Bug or invariant violation |

use thiserror::Error;

/// Result type for workspace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure to decode an identifier string back into its sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The identifier was empty
    #[error("identifier is empty")]
    Empty,

    /// The identifier contains a symbol outside the configured alphabet
    #[error("symbol {symbol:?} at position {position} is not in the alphabet")]
    InvalidSymbol {
        /// Offending symbol
        symbol: char,
        /// Character position within the identifier
        position: usize,
    },

    /// The identifier decodes to a value that does not fit in 64 bits
    #[error("identifier {0:?} is out of range")]
    Overflow(String),

    /// Decode failure reported by a remote peer
    #[error("{0}")]
    Remote(String),
}

/// Malformed id codec configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A numeric property could not be parsed as an integer
    #[error("the value {value:?} for property {key} must be an integer")]
    NotAnInteger {
        /// Property key
        key: String,
        /// Raw value found in the configuration
        value: String,
    },

    /// Block size outside the supported range
    #[error("block size {0} must be between 1 and 64")]
    BlockSize(u32),

    /// Alphabet cannot express a positional encoding
    #[error("alphabet must contain at least two symbols, got {0}")]
    AlphabetTooShort(usize),

    /// Alphabet repeats a symbol, which would make decoding ambiguous
    #[error("alphabet repeats symbol {0:?}")]
    DuplicateSymbol(char),

    /// Configuration source could not be read
    #[error("failed to read configuration from {path}: {reason}")]
    Unreadable {
        /// Source location
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// Configuration failure reported by a remote peer
    #[error("{0}")]
    Remote(String),
}

/// All workspace store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Missing or unusable input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Target workspace does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Target workspace is in a state that forbids the operation
    #[error("conflict: {0}")]
    Conflict(String),

    /// Malformed configuration
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Operation is not supported by this repository
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// Identifier could not be decoded
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

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

impl Error {
    /// Canonical code for this error, stable across the wire.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidArgument(_) => "InvalidArgument",
            Error::NotFound(_) => "NotFound",
            Error::Conflict(_) => "Conflict",
            Error::Configuration(_) => "Configuration",
            Error::Unsupported(_) => "Unsupported",
            Error::Decode(_) => "Decode",
            Error::Unauthorized(_) => "Unauthorized",
            Error::Transport(_) => "Transport",
            Error::Internal(_) => "Internal",
        }
    }

    /// Check if this is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
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
