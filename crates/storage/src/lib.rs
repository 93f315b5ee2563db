//! Storage layer for vwise
//!
//! This crate implements the authoritative in-memory workspace store:
//! - WorkspaceStore: DashMap of per-workspace histories
//! - WorkspaceHistory: ordered versions behind a per-workspace mutex
//! - merge_update: three-way field merge applied on every update

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod history;
pub mod merge;
pub mod store;

pub use history::WorkspaceHistory;
pub use merge::merge_update;
pub use store::WorkspaceStore;
