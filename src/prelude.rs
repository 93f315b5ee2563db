//! Convenient imports for vwise.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```
//! use vwise::prelude::*;
//!
//! let db = Vwise::new()?;
//! let ws = db.create(WorkspaceMeta::new().with_name("W"))?;
//! # Ok::<(), vwise::Error>(())
//! ```

// Main entry point
pub use crate::database::{Vwise, VwiseBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use vwise_core::{IdConfig, Properties, StoreConfig, WorkspaceMeta, WorkspaceRepository};

// Access control
pub use vwise_security::{AccessMode, Action, Authorizer, Decision};
