//! The command executor.
//!
//! Every command is authorized, dispatched to its handler and, on failure,
//! logged with a fresh error id. Internal failures carry that id in the
//! returned message so a report can be matched to the log line.

use std::sync::Arc;

use tracing::{error, warn};
use uuid::Uuid;
use vwise_core::{Error, WorkspaceRepository};
use vwise_security::{AllowAll, Authorizer};

use crate::handlers::workspace;
use crate::{Command, Output, Result};

/// Executes [`Command`]s against a repository.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use vwise_core::{StoreConfig, WorkspaceMeta};
/// use vwise_executor::{Command, Executor, Output};
/// use vwise_storage::WorkspaceStore;
///
/// let store = Arc::new(WorkspaceStore::new(&StoreConfig::default()).unwrap());
/// let executor = Executor::new(store);
///
/// let output = executor
///     .execute(Command::CreateWorkspace {
///         data: WorkspaceMeta::new().with_name("W"),
///     })
///     .unwrap();
/// assert!(matches!(output, Output::Workspace(_)));
/// ```
#[derive(Clone)]
pub struct Executor {
    repo: Arc<dyn WorkspaceRepository>,
    authorizer: Arc<dyn Authorizer>,
}

impl Executor {
    /// Create an executor that permits every command.
    pub fn new(repo: Arc<dyn WorkspaceRepository>) -> Self {
        Self::with_authorizer(repo, Arc::new(AllowAll))
    }

    /// Create an executor guarded by `authorizer`.
    pub fn with_authorizer(
        repo: Arc<dyn WorkspaceRepository>,
        authorizer: Arc<dyn Authorizer>,
    ) -> Self {
        Self { repo, authorizer }
    }

    /// Underlying repository.
    pub fn repository(&self) -> &Arc<dyn WorkspaceRepository> {
        &self.repo
    }

    /// Execute a command.
    pub fn execute(&self, command: Command) -> Result<Output> {
        let name = command.name();
        self.dispatch(command).map_err(|e| report(name, e))
    }

    /// Execute a JSON-encoded command and return a JSON response envelope.
    pub fn execute_json(&self, request: &str) -> String {
        let result = vwise_wire::decode_request::<Command>(request)
            .map_err(|e| Error::InvalidArgument(e.to_string()))
            .and_then(|command| self.execute(command));
        vwise_wire::encode_response(&result)
    }

    fn dispatch(&self, command: Command) -> Result<Output> {
        let action = command.action();
        let target = command.target();
        if !self.authorizer.authorize(action, target).is_allowed() {
            warn!(
                action = action.name(),
                workspace = target.unwrap_or_default(),
                "Authorization denied"
            );
            return Err(Error::Unauthorized(match target {
                Some(id) => format!("Not permitted to {} workspace [{}].", action, id),
                None => format!("Not permitted to {} workspaces.", action),
            }));
        }

        let repo = self.repo.as_ref();
        match command {
            Command::ListWorkspaces => workspace::list_workspaces(repo),
            Command::GetWorkspace { id, version } => {
                workspace::get_workspace(repo, &id, version.as_deref())
            }
            Command::CreateWorkspace { data } => workspace::create_workspace(repo, data),
            Command::UpdateWorkspace { id, data } => workspace::update_workspace(repo, &id, data),
            Command::RemoveWorkspace { id, purge } => workspace::remove_workspace(repo, &id, purge),
        }
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").finish_non_exhaustive()
    }
}

/// Log a failed command under a fresh error id.
fn report(command: &str, e: Error) -> Error {
    let error_id = Uuid::new_v4();
    if e.is_serious() {
        error!(%error_id, command, error = %e, "Command failed");
        return match e {
            Error::Internal(message) => {
                Error::Internal(format!("{} [Error ID: {}]", message, error_id))
            }
            other => other,
        };
    }
    warn!(%error_id, command, code = e.error_code(), error = %e, "Command rejected");
    e
}
