//! JSON decoding for workspace records and envelopes
//!
//! Unknown record fields are ignored.

use super::envelope::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;
use vwise_core::{Error, Result, WorkspaceMeta};

/// Failure to produce or parse a wire document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Value could not be serialized
    #[error("Failed to encode: {0}")]
    Encode(String),

    /// Input is not valid JSON or does not have the expected shape
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(e: serde_json::Error) -> Self {
        FormatError::InvalidJson(e.to_string())
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Error::Transport(e.to_string())
    }
}

/// Decode a workspace record.
pub fn decode_workspace(json: &str) -> std::result::Result<WorkspaceMeta, FormatError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a request payload.
pub fn decode_request<C: DeserializeOwned>(json: &str) -> std::result::Result<C, FormatError> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a response envelope into the result it reports.
///
/// The outer error is a malformed document; the inner one is the error the
/// peer reported.
pub fn decode_response<T: DeserializeOwned>(
    json: &str,
) -> std::result::Result<Result<T>, FormatError> {
    let response: Response<T> = serde_json::from_str(json)?;
    Ok(response.into_result())
}
