//! Access control for the vwise workspace store.
//!
//! This crate provides the [`Authorizer`] hook consulted before every
//! repository operation, plus the [`AccessMode`] used to build the stock
//! [`AccessPolicy`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Repository operation being authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// List all workspaces
    List,
    /// Read a workspace, current or historical
    Read,
    /// Create a workspace
    Create,
    /// Update a workspace
    Update,
    /// Soft-delete a workspace
    Remove,
    /// Permanently discard a workspace
    Purge,
}

impl Action {
    /// Whether the action changes stored state.
    pub fn is_mutating(self) -> bool {
        !matches!(self, Action::List | Action::Read)
    }

    /// Stable name of the action.
    pub fn name(self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Remove => "remove",
            Action::Purge => "purge",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Proceed with the operation
    Allow,
    /// Refuse the operation
    Deny,
}

impl Decision {
    /// Whether the operation may proceed.
    pub fn is_allowed(self) -> bool {
        self == Decision::Allow
    }
}

/// Hook consulted before a repository operation runs.
///
/// `target` is the workspace id for operations that address one workspace,
/// and `None` for `List` and `Create`.
pub trait Authorizer: Send + Sync {
    /// Decide whether `action` on `target` may proceed.
    fn authorize(&self, action: Action, target: Option<&str>) -> Decision;
}

/// Authorizer that permits everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl Authorizer for AllowAll {
    fn authorize(&self, _action: Action, _target: Option<&str>) -> Decision {
        Decision::Allow
    }
}

/// Controls whether the store allows writes or is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccessMode {
    /// Every operation is permitted
    #[default]
    ReadWrite,
    /// Only `List` and `Read` are permitted
    ReadOnly,
}

/// Authorizer derived from an [`AccessMode`].
///
/// ```
/// use vwise_security::{AccessMode, AccessPolicy, Action, Authorizer, Decision};
///
/// let policy = AccessPolicy::new().access_mode(AccessMode::ReadOnly);
/// assert_eq!(policy.authorize(Action::Read, Some("mmmmn")), Decision::Allow);
/// assert_eq!(policy.authorize(Action::Create, None), Decision::Deny);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    /// Mode enforced by this policy
    pub access_mode: AccessMode,
}

impl AccessPolicy {
    /// Read-write policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode.
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }
}

impl Authorizer for AccessPolicy {
    fn authorize(&self, action: Action, target: Option<&str>) -> Decision {
        if self.access_mode == AccessMode::ReadOnly && action.is_mutating() {
            warn!(
                action = action.name(),
                workspace = target.unwrap_or_default(),
                "Denied mutating action in read-only mode"
            );
            return Decision::Deny;
        }
        Decision::Allow
    }
}
