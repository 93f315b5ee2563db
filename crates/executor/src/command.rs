//! Commands accepted by the [`Executor`](crate::Executor).
//!
//! Each command maps to one repository operation. Commands are serialized
//! with a `command` tag so they can travel as request bodies:
//!
//! ```json
//! {"command":"GetWorkspace","id":"mmmmn","version":null}
//! ```

use serde::{Deserialize, Serialize};
use vwise_core::WorkspaceMeta;
use vwise_security::Action;

/// A single repository request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// List every workspace that has not been removed.
    ListWorkspaces,

    /// Read a workspace. A missing or blank `version` reads the current state.
    GetWorkspace {
        /// Workspace id
        id: String,
        /// Version to read as of
        #[serde(default)]
        version: Option<String>,
    },

    /// Create a workspace. Any id or version in `data` is discarded.
    CreateWorkspace {
        /// Initial field values
        data: WorkspaceMeta,
    },

    /// Update the workspace addressed by `id`.
    UpdateWorkspace {
        /// Workspace id, as addressed by the caller
        id: String,
        /// Edited workspace, referencing the version it was edited from
        data: WorkspaceMeta,
    },

    /// Remove a workspace, or discard it entirely when `purge` is set.
    RemoveWorkspace {
        /// Workspace id
        id: String,
        /// Discard history as well
        #[serde(default)]
        purge: bool,
    },
}

impl Command {
    /// Command name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::ListWorkspaces => "ListWorkspaces",
            Command::GetWorkspace { .. } => "GetWorkspace",
            Command::CreateWorkspace { .. } => "CreateWorkspace",
            Command::UpdateWorkspace { .. } => "UpdateWorkspace",
            Command::RemoveWorkspace { .. } => "RemoveWorkspace",
        }
    }

    /// Action checked by the authorizer before the command runs.
    pub fn action(&self) -> Action {
        match self {
            Command::ListWorkspaces => Action::List,
            Command::GetWorkspace { .. } => Action::Read,
            Command::CreateWorkspace { .. } => Action::Create,
            Command::UpdateWorkspace { .. } => Action::Update,
            Command::RemoveWorkspace { purge: false, .. } => Action::Remove,
            Command::RemoveWorkspace { purge: true, .. } => Action::Purge,
        }
    }

    /// Workspace addressed by the command, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Command::ListWorkspaces | Command::CreateWorkspace { .. } => None,
            Command::GetWorkspace { id, .. }
            | Command::UpdateWorkspace { id, .. }
            | Command::RemoveWorkspace { id, .. } => Some(id),
        }
    }
}
