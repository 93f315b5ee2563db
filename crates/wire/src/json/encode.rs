//! JSON encoding for workspace records and envelopes
//!
//! Absent record fields are omitted rather than written as `null`.

use super::decode::FormatError;
use super::envelope::Response;
use serde::Serialize;
use vwise_core::{Result, WorkspaceMeta};

/// Encode a workspace record.
pub fn encode_workspace(workspace: &WorkspaceMeta) -> std::result::Result<String, FormatError> {
    serde_json::to_string(workspace).map_err(|e| FormatError::Encode(e.to_string()))
}

/// Encode a request payload.
pub fn encode_request<C: Serialize>(request: &C) -> std::result::Result<String, FormatError> {
    serde_json::to_string(request).map_err(|e| FormatError::Encode(e.to_string()))
}

/// Encode an operation result as a response envelope.
///
/// A body that fails to serialize is reported as an `Internal` error
/// envelope, so this always produces a response.
pub fn encode_response<T: Serialize>(result: &Result<T>) -> String {
    match serde_json::to_string(&Response::from(result)) {
        Ok(json) => json,
        Err(e) => serde_json::json!({
            "status": "error",
            "error": {
                "code": "Internal",
                "message": format!("failed to encode response: {}", e),
            },
        })
        .to_string(),
    }
}
