//! In-memory workspace store
//!
//! Replaces a single lock over the whole collection with a DashMap of
//! per-workspace histories, each behind its own mutex.
//!
//! # Design
//!
//! - DashMap: sharded, lock-free reads, conflict-free inserts of freshly minted ids
//! - Keyed by decoded [`Sequence`], never by the display string
//! - Per-workspace mutex: different workspaces never contend
//!
//! # Purge
//!
//! Purge goes through the workspace's own lock before the slot is removed
//! from the map. An update that fetched the handle before the purge either
//! completes first (purge waits for the lock) or observes the purged flag and
//! fails with `NotFound`. A purged history is never resurrected.

use crate::history::WorkspaceHistory;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};
use vwise_core::{
    Error, IdFactory, IdObfuscator, Result, Sequence, StoreConfig, WorkspaceMeta,
    WorkspaceRepository, VERSION_IDS, WORKSPACE_IDS,
};

/// Authoritative in-memory collection of workspaces.
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - `create`: mints an id atomically and inserts a new slot
/// - `get`/`update`/`remove`: lock only the target workspace
/// - `list_all`: snapshots the handles, then locks each workspace in turn
///
/// # Example
///
/// ```
/// use vwise_core::{StoreConfig, WorkspaceMeta, WorkspaceRepository};
/// use vwise_storage::WorkspaceStore;
///
/// let store = WorkspaceStore::new(&StoreConfig::default()).unwrap();
/// let created = store.create(WorkspaceMeta::new().with_name("W")).unwrap();
/// let id = created.id.clone().unwrap();
/// assert_eq!(store.get(&id).unwrap(), Some(created));
/// ```
pub struct WorkspaceStore {
    workspaces: DashMap<Sequence, Arc<WorkspaceHistory>>,
    workspace_ids: IdFactory,
    version_codec: Arc<IdObfuscator>,
}

impl WorkspaceStore {
    /// Create an empty store.
    ///
    /// Fails with `Configuration` if either id namespace is malformed.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let workspace_ids = IdFactory::for_namespace(&config.workspace_ids, WORKSPACE_IDS)?;
        let version_ids = IdFactory::for_namespace(&config.version_ids, VERSION_IDS)?;

        Ok(Self {
            workspaces: DashMap::new(),
            workspace_ids,
            version_codec: Arc::clone(version_ids.obfuscator()),
        })
    }

    /// Create with an expected number of workspaces.
    pub fn with_capacity(config: &StoreConfig, capacity: usize) -> Result<Self> {
        let store = Self::new(config)?;
        Ok(Self {
            workspaces: DashMap::with_capacity(capacity),
            ..store
        })
    }

    /// Number of workspaces held, including removed ones.
    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    /// Check if the store holds no workspaces.
    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }

    /// Total versions recorded across all workspaces.
    pub fn total_versions(&self) -> usize {
        self.handles()
            .iter()
            .map(|(_, history)| history.version_count())
            .sum()
    }

    /// Drop every workspace.
    pub fn clear(&self) {
        for (_, history) in self.handles() {
            history.purge();
        }
        self.workspaces.clear();
    }

    /// Look up a workspace handle. Ids that do not decode are unknown.
    fn history(&self, id: &str) -> Option<Arc<WorkspaceHistory>> {
        let seq = match self.workspace_ids.decode(id) {
            Ok(seq) => seq,
            Err(e) => {
                debug!(workspace = id, error = %e, "Undecodable workspace id");
                return None;
            }
        };
        self.workspaces.get(&seq).map(|entry| Arc::clone(entry.value()))
    }

    /// Snapshot the handles, sorted by id. No map guard is held afterwards.
    fn handles(&self) -> Vec<(Sequence, Arc<WorkspaceHistory>)> {
        let mut handles: Vec<_> = self
            .workspaces
            .iter()
            .map(|entry| (*entry.key(), Arc::clone(entry.value())))
            .collect();
        handles.sort_by_key(|(seq, _)| *seq);
        handles
    }
}

impl WorkspaceRepository for WorkspaceStore {
    fn list_all(&self) -> Result<Vec<WorkspaceMeta>> {
        Ok(self
            .handles()
            .into_iter()
            .filter_map(|(_, history)| history.current())
            .collect())
    }

    fn get(&self, id: &str) -> Result<Option<WorkspaceMeta>> {
        Ok(self.history(id).and_then(|history| history.current()))
    }

    fn get_version(&self, id: &str, version: &str) -> Result<Option<WorkspaceMeta>> {
        Ok(self
            .history(id)
            .and_then(|history| history.at_or_before(version)))
    }

    fn create(&self, draft: WorkspaceMeta) -> Result<WorkspaceMeta> {
        let (seq, id) = self.workspace_ids.next();
        let history = Arc::new(WorkspaceHistory::new(
            seq,
            id,
            &draft,
            Arc::clone(&self.version_codec),
        ));

        let created = history.current().ok_or_else(|| {
            Error::Internal(format!("Failed to create new workspace {}", history.display_id()))
        })?;
        self.workspaces.insert(seq, history);

        debug!(
            workspace = created.id.as_deref().unwrap_or_default(),
            version = created.version.as_deref().unwrap_or_default(),
            "Created workspace"
        );
        Ok(created)
    }

    fn update(&self, data: WorkspaceMeta) -> Result<WorkspaceMeta> {
        let id = data.id_str().ok_or_else(|| {
            Error::InvalidArgument("Cannot update workspace. No id supplied.".to_string())
        })?;
        if data.version_str().is_none() {
            return Err(Error::InvalidArgument(format!(
                "Cannot update the workspace, {} [{}]. The version of the workspace to modify \
                 was not referenced or is invalid.",
                data.display_name(),
                id
            )));
        }

        let history = self.history(id).ok_or_else(|| {
            Error::NotFound(format!(
                "Cannot update the workspace, {} [{}]. No workspace with this id exists.",
                data.display_name(),
                id
            ))
        })?;

        history.update(&data)
    }

    fn remove(&self, id: &str) -> Result<()> {
        if let Some(history) = self.history(id) {
            history.remove();
            debug!(workspace = id, "Removed workspace");
        }
        Ok(())
    }

    fn purge(&self, id: &str) -> Result<()> {
        if let Some(history) = self.history(id) {
            history.purge();
            self.workspaces.remove(&history.id());
            info!(workspace = id, "Purged workspace");
        }
        Ok(())
    }
}

impl std::fmt::Debug for WorkspaceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceStore")
            .field("workspaces", &self.len())
            .field("ids_minted", &self.workspace_ids.minted())
            .finish()
    }
}
