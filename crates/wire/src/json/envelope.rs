//! Request/response envelopes
//!
//! Responses are tagged by `status`:
//!
//! | Status | Shape |
//! |--------|-------|
//! | ok | `{"status":"ok","body":...}` |
//! | error | `{"status":"error","error":{"code":...,"message":...}}` |
//!
//! Requests are the serialized command itself; the envelope adds nothing.

use super::error::WireError;
use serde::{Deserialize, Serialize};

/// Response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response<T> {
    /// Successful response carrying a body
    Ok {
        /// Response payload
        body: T,
    },
    /// Failed response
    Error {
        /// Error detail
        error: WireError,
    },
}

impl<T> Response<T> {
    /// Whether the response reports success.
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }

    /// Convert into a typed result.
    pub fn into_result(self) -> vwise_core::Result<T> {
        match self {
            Response::Ok { body } => Ok(body),
            Response::Error { error } => Err(error.into_error()),
        }
    }
}

impl<'a, T> From<&'a vwise_core::Result<T>> for Response<&'a T> {
    fn from(result: &'a vwise_core::Result<T>) -> Self {
        match result {
            Ok(body) => Response::Ok { body },
            Err(e) => Response::Error {
                error: WireError::from(e),
            },
        }
    }
}
