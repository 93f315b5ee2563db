//! Workspace command handlers.
//!
//! Handlers translate request-level conventions (optional version, id in the
//! path and in the body, purge flag) into repository calls.

use vwise_core::types::non_blank;
use vwise_core::{Error, WorkspaceMeta, WorkspaceRepository};

use crate::{Output, Result};

/// Handle ListWorkspaces command.
pub fn list_workspaces(repo: &dyn WorkspaceRepository) -> Result<Output> {
    Ok(Output::Workspaces(repo.list_all()?))
}

/// Handle GetWorkspace command.
///
/// A missing or blank version reads the current state.
pub fn get_workspace(
    repo: &dyn WorkspaceRepository,
    id: &str,
    version: Option<&str>,
) -> Result<Output> {
    let found = match non_blank(version) {
        Some(version) => repo.get_version(id, version)?,
        None => repo.get(id)?,
    };
    Ok(Output::MaybeWorkspace(found))
}

/// Handle CreateWorkspace command.
pub fn create_workspace(repo: &dyn WorkspaceRepository, mut data: WorkspaceMeta) -> Result<Output> {
    data.id = None;
    data.version = None;
    Ok(Output::Workspace(repo.create(data)?))
}

/// Handle UpdateWorkspace command.
///
/// The body id defaults to `id`; a body naming a different workspace is
/// rejected.
pub fn update_workspace(
    repo: &dyn WorkspaceRepository,
    id: &str,
    mut data: WorkspaceMeta,
) -> Result<Output> {
    match data.id_str() {
        None => data.id = Some(id.to_string()),
        Some(body_id) if body_id != id => {
            return Err(Error::InvalidArgument(format!(
                "Cannot update the workspace, {} [{}]. The supplied data identifies \
                 a different workspace [{}].",
                data.display_name(),
                id,
                body_id
            )));
        }
        Some(_) => {}
    }
    Ok(Output::Workspace(repo.update(data)?))
}

/// Handle RemoveWorkspace command.
pub fn remove_workspace(repo: &dyn WorkspaceRepository, id: &str, purge: bool) -> Result<Output> {
    if purge {
        repo.purge(id)?;
    } else {
        repo.remove(id)?;
    }
    Ok(Output::Unit)
}
