//! The workspace repository contract
//!
//! Implemented by the in-memory store and by the remote client. Request
//! handlers depend only on this trait.

use crate::error::Result;
use crate::types::WorkspaceMeta;

/// Maintains a collection of versioned workspaces.
///
/// All records returned are detached copies.
pub trait WorkspaceRepository: Send + Sync {
    /// List the current state of every workspace that has not been removed,
    /// ordered by ascending id.
    fn list_all(&self) -> Result<Vec<WorkspaceMeta>>;

    /// Get the current state of a workspace.
    ///
    /// Returns `None` if the workspace does not exist or has been removed.
    fn get(&self, id: &str) -> Result<Option<WorkspaceMeta>>;

    /// Get the workspace as of `version`: the latest state whose version is
    /// not after the requested one.
    ///
    /// Removed workspaces remain readable through this method.
    fn get_version(&self, id: &str, version: &str) -> Result<Option<WorkspaceMeta>>;

    /// Create a workspace from `draft`. Any supplied id and version are ignored.
    fn create(&self, draft: WorkspaceMeta) -> Result<WorkspaceMeta>;

    /// Apply the fields of `data` that differ from the version it references
    /// to the most recent state of the workspace.
    ///
    /// The returned workspace may include changes made by other writers after
    /// the referenced version.
    fn update(&self, data: WorkspaceMeta) -> Result<WorkspaceMeta>;

    /// Hide a workspace from listing and id-only lookup. History is retained.
    fn remove(&self, id: &str) -> Result<()>;

    /// Permanently discard a workspace and all of its history.
    fn purge(&self, id: &str) -> Result<()>;
}
