//! # vwise
//!
//! Versioned workspace metadata store with three-way merge updates.
//!
//! Every workspace keeps an ordered history of immutable versions. Updates
//! name the version they were edited from; only the fields that changed
//! relative to that version are applied to the latest state, so concurrent
//! writers touching different fields never overwrite each other.
//!
//! ## Quick Start
//!
//! ```
//! use vwise::prelude::*;
//!
//! let db = Vwise::new()?;
//! let base = db.create(WorkspaceMeta::new().with_name("Atlas").with_description("maps"))?;
//!
//! // two writers edit from the same baseline
//! db.update(base.clone().with_name("Atlas II"))?;
//! let merged = db.update(base.clone().with_description("charts"))?;
//!
//! assert_eq!(merged.name.as_deref(), Some("Atlas II"));
//! assert_eq!(merged.description.as_deref(), Some("charts"));
//! # Ok::<(), vwise::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`vwise_core`] - record type, id codec, configuration, repository trait
//! - [`vwise_storage`] - the in-memory store
//! - [`vwise_security`] - authorization hook
//! - [`vwise_wire`] - JSON envelopes
//! - [`vwise_executor`] - command execution and the remote client

#![warn(missing_docs)]

mod database;
mod error;

pub mod prelude;

// Re-export main entry points
pub use database::{Vwise, VwiseBuilder};
pub use error::{Error, Result};

// Re-export layer crates
pub use vwise_core;
pub use vwise_executor;
pub use vwise_security;
pub use vwise_storage;
pub use vwise_wire;
