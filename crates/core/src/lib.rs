//! Core types for the vwise workspace store
//!
//! This crate defines the pieces shared by every layer:
//! - [`WorkspaceMeta`]: the record type
//! - [`IdFactory`] / [`IdObfuscator`]: opaque, ordered identifiers
//! - [`IdConfig`] / [`StoreConfig`] / [`Properties`]: codec configuration
//! - [`Error`]: the canonical error taxonomy
//! - [`WorkspaceRepository`]: the repository contract

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod ids;
pub mod repository;
pub mod types;

pub use config::{IdConfig, Properties, StoreConfig, VERSION_IDS, WORKSPACE_IDS};
pub use error::{ConfigError, DecodeError, Error, Result};
pub use ids::{IdFactory, IdObfuscator, Sequence};
pub use repository::WorkspaceRepository;
pub use types::WorkspaceMeta;
