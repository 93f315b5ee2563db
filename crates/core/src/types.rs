//! Workspace record types
//!
//! [`WorkspaceMeta`] is the value type moved in and out of every repository.
//! It is a plain owned struct, so anything handed to a caller is a detached
//! copy that can be mutated freely.

use serde::{Deserialize, Serialize};

/// Descriptive metadata about a workspace.
///
/// A workspace is grouped under a `scope` (e.g. `@audenaert` for a personal
/// scope or `~tamu.cpsc410.spring2017` for a group) and identified within it
/// by a user-defined `key`.
///
/// `id` and `version` are assigned by the store. Drafts passed to `create`
/// may leave them unset; updates must carry both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceMeta {
    /// Stable, opaque workspace identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Opaque token naming one immutable state of the workspace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Grouping of workspaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// User-defined identifier, unique within the scope
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Brief description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WorkspaceMeta {
    /// Create an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The id, if present and not blank.
    pub fn id_str(&self) -> Option<&str> {
        non_blank(self.id.as_deref())
    }

    /// The version, if present and not blank.
    pub fn version_str(&self) -> Option<&str> {
        non_blank(self.version.as_deref())
    }

    /// Name used in log and error messages.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

/// Treat whitespace-only strings as missing.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
