//! Wire encoding for vwise
//!
//! This crate implements the JSON contract between the request handler and
//! remote clients:
//!
//! - Workspace records: absent fields omitted, unknown fields ignored
//! - Response envelopes tagged by `status`
//! - Error bodies carrying the canonical error code
//!
//! ## Wire Encoding Rules
//!
//! | Payload | JSON Encoding |
//! |---------|---------------|
//! | Success | `{"status":"ok","body":...}` |
//! | Failure | `{"status":"error","error":{"code":"...","message":"..."}}` |
//! | Absent record | `null` |
//! | Unit | `null` |
//!
//! ## Examples
//!
//! ```
//! use vwise_core::{Error, WorkspaceMeta};
//! use vwise_wire::{decode_response, encode_response};
//!
//! let json = encode_response::<WorkspaceMeta>(&Err(Error::NotFound("gone".into())));
//! assert_eq!(
//!     json,
//!     r#"{"status":"error","error":{"code":"NotFound","message":"gone"}}"#
//! );
//!
//! let decoded = decode_response::<WorkspaceMeta>(&json).unwrap();
//! assert_eq!(decoded, Err(Error::NotFound("gone".into())));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    decode_request, decode_response, decode_workspace, encode_request, encode_response,
    encode_workspace, FormatError, Response, WireError,
};
