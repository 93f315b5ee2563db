//! JSON wire encoding for vwise
//!
//! Records use the field names of [`vwise_core::WorkspaceMeta`]. Responses
//! are wrapped in a `status`-tagged [`Response`] envelope.

mod decode;
mod encode;
mod envelope;
mod error;

pub use decode::{decode_request, decode_response, decode_workspace, FormatError};
pub use encode::{encode_request, encode_response, encode_workspace};
pub use envelope::Response;
pub use error::WireError;
