//! Per-workspace version history
//!
//! A [`WorkspaceHistory`] owns every snapshot ever recorded for one workspace,
//! keyed by the decoded version [`Sequence`] so that "latest" and "at or
//! before" follow minting order rather than string order.
//!
//! ## Locking
//!
//! All state sits behind one `parking_lot::Mutex`. Every read and every
//! mutation (including the whole read-merge-write of an update) holds it for
//! the duration of the operation, so updates to one workspace are
//! linearizable while different workspaces never contend.
//!
//! ## Lifecycle
//!
//! ```text
//! create ──► live ──remove──► removed ──purge──► purged
//!              └──────────────purge──────────────┘
//! ```
//!
//! `removed` hides the workspace from id-only reads but keeps history readable
//! by version. `purged` drops everything; a handle that outlived its slot in
//! the store observes an empty history.

use crate::merge::merge_update;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};
use vwise_core::{Error, IdFactory, IdObfuscator, Result, Sequence, WorkspaceMeta};

#[derive(Debug, Default)]
struct HistoryState {
    versions: BTreeMap<Sequence, WorkspaceMeta>,
    removed: bool,
    purged: bool,
}

impl HistoryState {
    fn latest(&self) -> Option<&WorkspaceMeta> {
        self.versions.values().next_back()
    }

    fn at_or_before(&self, version: Sequence) -> Option<&WorkspaceMeta> {
        self.versions.range(..=version).next_back().map(|(_, ws)| ws)
    }
}

/// Versioned history of a single workspace.
#[derive(Debug)]
pub struct WorkspaceHistory {
    id: Sequence,
    display_id: String,
    version_ids: IdFactory,
    state: Mutex<HistoryState>,
}

impl WorkspaceHistory {
    /// Start a history from `draft`, minting the first version.
    ///
    /// Version numbering is private to this history and starts at 1.
    pub fn new(
        id: Sequence,
        display_id: String,
        draft: &WorkspaceMeta,
        version_codec: Arc<IdObfuscator>,
    ) -> Self {
        let version_ids = IdFactory::with_obfuscator(version_codec);
        let (version, version_str) = version_ids.next();

        let mut initial = draft.clone();
        initial.id = Some(display_id.clone());
        initial.version = Some(version_str);

        let mut state = HistoryState::default();
        state.versions.insert(version, initial);

        Self {
            id,
            display_id,
            version_ids,
            state: Mutex::new(state),
        }
    }

    /// Decoded workspace id.
    pub fn id(&self) -> Sequence {
        self.id
    }

    /// Workspace id as handed to callers.
    pub fn display_id(&self) -> &str {
        &self.display_id
    }

    /// Current state, or `None` once removed or purged.
    pub fn current(&self) -> Option<WorkspaceMeta> {
        let state = self.state.lock();
        if state.removed || state.purged {
            return None;
        }
        state.latest().cloned()
    }

    /// State as of `version`: the greatest recorded version not after it.
    ///
    /// Readable after removal. Returns `None` if the version string cannot be
    /// decoded or precedes the first version.
    pub fn at_or_before(&self, version: &str) -> Option<WorkspaceMeta> {
        let seq = match self.version_ids.decode(version) {
            Ok(seq) => seq,
            Err(e) => {
                debug!(workspace = %self.display_id, version, error = %e, "Undecodable version");
                return None;
            }
        };

        let state = self.state.lock();
        if state.purged {
            return None;
        }
        state.at_or_before(seq).cloned()
    }

    /// Apply `data` relative to the version it references and record the
    /// result as a new version.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `data` names no version, or one that resolves to
    ///   nothing in this history
    /// - `Conflict` if the workspace has been removed
    /// - `NotFound` if the workspace has been purged
    pub fn update(&self, data: &WorkspaceMeta) -> Result<WorkspaceMeta> {
        let invalid_version = || {
            Error::InvalidArgument(format!(
                "Cannot update the workspace, {} [{}]. The version of the workspace to modify \
                 was not referenced or is invalid.",
                data.display_name(),
                self.display_id
            ))
        };

        let reference = data.version_str().ok_or_else(invalid_version)?;
        let reference = self
            .version_ids
            .decode(reference)
            .map_err(|_| invalid_version())?;

        let mut state = self.state.lock();
        if state.purged {
            return Err(Error::NotFound(format!(
                "Cannot update the workspace, {} [{}]. No workspace with this id exists.",
                data.display_name(),
                self.display_id
            )));
        }
        if state.removed {
            warn!(workspace = %self.display_id, "Rejected update of removed workspace");
            return Err(Error::Conflict(format!(
                "Cannot update the workspace, {} [{}]. It has been deleted.",
                data.display_name(),
                self.display_id
            )));
        }

        let base = state.at_or_before(reference).ok_or_else(invalid_version)?;
        let current = state.latest().ok_or_else(|| {
            Error::Internal(format!(
                "Cannot update the workspace, {} [{}]. Failed to retrieve current state.",
                data.display_name(),
                self.display_id
            ))
        })?;

        let mut updated = merge_update(data, base, current);
        let (version, version_str) = self.version_ids.next();
        updated.version = Some(version_str);
        state.versions.insert(version, updated.clone());

        debug!(
            workspace = %self.display_id,
            version = updated.version.as_deref().unwrap_or_default(),
            "Recorded workspace version"
        );
        Ok(updated)
    }

    /// Mark the workspace removed. History stays readable by version.
    pub fn remove(&self) {
        self.state.lock().removed = true;
    }

    /// Discard all history.
    pub fn purge(&self) {
        let mut state = self.state.lock();
        state.purged = true;
        state.versions.clear();
    }

    /// Whether the workspace has been removed.
    pub fn is_removed(&self) -> bool {
        self.state.lock().removed
    }

    /// Whether the workspace has been purged.
    pub fn is_purged(&self) -> bool {
        self.state.lock().purged
    }

    /// Number of recorded versions.
    pub fn version_count(&self) -> usize {
        self.state.lock().versions.len()
    }
}
