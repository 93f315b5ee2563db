//! Wire error encoding
//!
//! Errors travel as a code plus message:
//! ```json
//! {
//!   "code": "NotFound",
//!   "message": "Cannot update the workspace, W [mmmmn]. No workspace with this id exists."
//! }
//! ```
//!
//! The code is [`Error::error_code`]; the message is the variant's payload
//! without the display prefix, so decoding rebuilds an equal-displaying error.

use serde::{Deserialize, Serialize};
use vwise_core::{ConfigError, DecodeError, Error};

/// Error body carried in an error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireError {
    /// Canonical error code
    pub code: String,
    /// Human-readable detail
    pub message: String,
}

impl WireError {
    /// Rebuild the typed error.
    ///
    /// Unknown codes become `Internal`, keeping the code in the message.
    pub fn into_error(self) -> Error {
        let WireError { code, message } = self;
        match code.as_str() {
            "InvalidArgument" => Error::InvalidArgument(message),
            "NotFound" => Error::NotFound(message),
            "Conflict" => Error::Conflict(message),
            "Configuration" => Error::Configuration(ConfigError::Remote(message)),
            "Unsupported" => Error::Unsupported(message),
            "Decode" => Error::Decode(DecodeError::Remote(message)),
            "Unauthorized" => Error::Unauthorized(message),
            "Transport" => Error::Transport(message),
            "Internal" => Error::Internal(message),
            _ => Error::Internal(format!("{}: {}", code, message)),
        }
    }
}

impl From<&Error> for WireError {
    fn from(error: &Error) -> Self {
        let message = match error {
            Error::InvalidArgument(m)
            | Error::NotFound(m)
            | Error::Conflict(m)
            | Error::Unsupported(m)
            | Error::Unauthorized(m)
            | Error::Transport(m)
            | Error::Internal(m) => m.clone(),
            Error::Configuration(e) => e.to_string(),
            Error::Decode(e) => e.to_string(),
        };
        WireError {
            code: error.error_code().to_string(),
            message,
        }
    }
}

impl From<WireError> for Error {
    fn from(error: WireError) -> Self {
        error.into_error()
    }
}
