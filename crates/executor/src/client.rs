//! Remote repository client.
//!
//! [`RemoteRepository`] implements [`WorkspaceRepository`] by sending
//! JSON-encoded [`Command`]s over a [`Transport`] and decoding the response
//! envelope. Blank ids and versions are rejected locally before anything is
//! sent. Purge is not offered remotely.

use std::sync::Arc;

use vwise_core::types::non_blank;
use vwise_core::{Error, Result, WorkspaceMeta, WorkspaceRepository};

use crate::{Command, Executor, Output};

/// Carries one request document to a server and returns its response
/// document.
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the response.
    ///
    /// Fails with `Error::Transport` if no response was produced.
    fn send(&self, request: &str) -> Result<String>;
}

/// Transport that hands requests straight to an in-process [`Executor`].
#[derive(Debug, Clone)]
pub struct LoopbackTransport {
    executor: Arc<Executor>,
}

impl LoopbackTransport {
    /// Deliver requests to `executor`.
    pub fn new(executor: Arc<Executor>) -> Self {
        Self { executor }
    }
}

impl Transport for LoopbackTransport {
    fn send(&self, request: &str) -> Result<String> {
        Ok(self.executor.execute_json(request))
    }
}

/// Repository backed by a remote server.
#[derive(Debug, Clone)]
pub struct RemoteRepository<T: Transport> {
    transport: T,
}

impl<T: Transport> RemoteRepository<T> {
    /// Create a client over `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn call(&self, command: Command) -> Result<Output> {
        let request = vwise_wire::encode_request(&command)?;
        let response = self.transport.send(&request)?;
        vwise_wire::decode_response::<Output>(&response)?
    }
}

fn require<'a>(value: Option<&'a str>, what: &str) -> Result<&'a str> {
    non_blank(value).ok_or_else(|| Error::InvalidArgument(format!("Invalid {} supplied.", what)))
}

fn unexpected(command: &str, output: &Output) -> Error {
    Error::Internal(format!(
        "Unexpected output {} for {}",
        output.kind(),
        command
    ))
}

impl<T: Transport> WorkspaceRepository for RemoteRepository<T> {
    fn list_all(&self) -> Result<Vec<WorkspaceMeta>> {
        match self.call(Command::ListWorkspaces)? {
            Output::Workspaces(list) => Ok(list),
            other => Err(unexpected("ListWorkspaces", &other)),
        }
    }

    fn get(&self, id: &str) -> Result<Option<WorkspaceMeta>> {
        let id = require(Some(id), "workspace id")?;
        match self.call(Command::GetWorkspace {
            id: id.to_string(),
            version: None,
        })? {
            Output::MaybeWorkspace(found) => Ok(found),
            other => Err(unexpected("GetWorkspace", &other)),
        }
    }

    fn get_version(&self, id: &str, version: &str) -> Result<Option<WorkspaceMeta>> {
        let id = require(Some(id), "workspace id")?;
        let version = require(Some(version), "workspace version")?;
        match self.call(Command::GetWorkspace {
            id: id.to_string(),
            version: Some(version.to_string()),
        })? {
            Output::MaybeWorkspace(found) => Ok(found),
            other => Err(unexpected("GetWorkspace", &other)),
        }
    }

    fn create(&self, draft: WorkspaceMeta) -> Result<WorkspaceMeta> {
        match self.call(Command::CreateWorkspace { data: draft })? {
            Output::Workspace(ws) => Ok(ws),
            other => Err(unexpected("CreateWorkspace", &other)),
        }
    }

    fn update(&self, data: WorkspaceMeta) -> Result<WorkspaceMeta> {
        let id = require(data.id.as_deref(), "workspace id")?.to_string();
        require(data.version.as_deref(), "workspace version")?;
        match self.call(Command::UpdateWorkspace { id, data })? {
            Output::Workspace(ws) => Ok(ws),
            other => Err(unexpected("UpdateWorkspace", &other)),
        }
    }

    fn remove(&self, id: &str) -> Result<()> {
        let id = require(Some(id), "workspace id")?;
        match self.call(Command::RemoveWorkspace {
            id: id.to_string(),
            purge: false,
        })? {
            Output::Unit => Ok(()),
            other => Err(unexpected("RemoveWorkspace", &other)),
        }
    }

    fn purge(&self, id: &str) -> Result<()> {
        Err(Error::Unsupported(format!(
            "Cannot purge workspace [{}] through a remote repository.",
            id
        )))
    }
}
