//! Results produced by the [`Executor`](crate::Executor).

use serde::{Deserialize, Serialize};
use vwise_core::WorkspaceMeta;

/// Successful command result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Workspaces in ascending id order
    Workspaces(Vec<WorkspaceMeta>),
    /// A workspace that may not exist
    MaybeWorkspace(Option<WorkspaceMeta>),
    /// A created or updated workspace
    Workspace(WorkspaceMeta),
    /// No payload
    Unit,
}

impl Output {
    /// Variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Output::Workspaces(_) => "Workspaces",
            Output::MaybeWorkspace(_) => "MaybeWorkspace",
            Output::Workspace(_) => "Workspace",
            Output::Unit => "Unit",
        }
    }
}
