//! Main entry point for vwise.
//!
//! This module provides the `Vwise` struct, which owns the workspace store,
//! its id configuration and the executor guarding it.

use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use vwise_core::{Properties, StoreConfig, WorkspaceMeta, WorkspaceRepository};
use vwise_executor::{Executor, LoopbackTransport, RemoteRepository};
use vwise_security::{AccessMode, AccessPolicy, Authorizer};
use vwise_storage::WorkspaceStore;

/// A vwise workspace store.
///
/// Create one with [`Vwise::new`] or [`Vwise::builder`]. Instances are
/// independent: nothing is shared through process-wide state.
///
/// The inherent methods call the store directly. Use [`Vwise::executor`]
/// or [`Vwise::remote_client`] to go through the configured authorizer.
///
/// # Example
///
/// ```
/// use vwise::prelude::*;
///
/// let db = Vwise::new()?;
///
/// let ws = db.create(WorkspaceMeta::new().with_name("Draft"))?;
/// let id = ws.id.clone().unwrap();
///
/// let renamed = db.update(ws.clone().with_name("Final"))?;
/// assert_eq!(db.get(&id)?, Some(renamed));
///
/// // the original version is still readable
/// let version = ws.version.as_deref().unwrap();
/// assert_eq!(db.get_version(&id, version)?, Some(ws));
/// # Ok::<(), vwise::Error>(())
/// ```
pub struct Vwise {
    store: Arc<WorkspaceStore>,
    executor: Arc<Executor>,
    config: StoreConfig,
}

impl Vwise {
    /// Open a store with default id configuration and no access restrictions.
    pub fn new() -> Result<Self> {
        Self::builder().open()
    }

    /// Open a store configured from a properties file.
    pub fn open(config_file: impl AsRef<Path>) -> Result<Self> {
        Self::builder().config_file(config_file).open()
    }

    /// Create a builder for store configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use vwise::prelude::*;
    ///
    /// let db = Vwise::builder()
    ///     .property("ids.workspaces.obfuscate.min_length", "8")
    ///     .access_mode(AccessMode::ReadOnly)
    ///     .open()?;
    /// assert_eq!(db.config().workspace_ids.min_length, 8);
    /// # Ok::<(), vwise::Error>(())
    /// ```
    pub fn builder() -> VwiseBuilder {
        VwiseBuilder::new()
    }

    /// Id configuration in effect.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<WorkspaceStore> {
        &self.store
    }

    /// Executor guarded by the configured authorizer.
    pub fn executor(&self) -> &Arc<Executor> {
        &self.executor
    }

    /// Client speaking the repository contract through the executor.
    pub fn remote_client(&self) -> RemoteRepository<LoopbackTransport> {
        RemoteRepository::new(LoopbackTransport::new(Arc::clone(&self.executor)))
    }

    /// List every workspace that has not been removed, in ascending id order.
    pub fn list(&self) -> Result<Vec<WorkspaceMeta>> {
        Ok(self.store.list_all()?)
    }

    /// Current state of a workspace.
    pub fn get(&self, id: &str) -> Result<Option<WorkspaceMeta>> {
        Ok(self.store.get(id)?)
    }

    /// State of a workspace as of `version`.
    pub fn get_version(&self, id: &str, version: &str) -> Result<Option<WorkspaceMeta>> {
        Ok(self.store.get_version(id, version)?)
    }

    /// Create a workspace.
    pub fn create(&self, draft: WorkspaceMeta) -> Result<WorkspaceMeta> {
        Ok(self.store.create(draft)?)
    }

    /// Update a workspace relative to the version `data` references.
    pub fn update(&self, data: WorkspaceMeta) -> Result<WorkspaceMeta> {
        Ok(self.store.update(data)?)
    }

    /// Remove a workspace, keeping its history.
    pub fn remove(&self, id: &str) -> Result<()> {
        Ok(self.store.remove(id)?)
    }

    /// Permanently discard a workspace.
    pub fn purge(&self, id: &str) -> Result<()> {
        Ok(self.store.purge(id)?)
    }
}

impl std::fmt::Debug for Vwise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vwise")
            .field("store", &self.store)
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for store configuration.
///
/// Configuration sources, lowest precedence first:
/// 1. Built-in defaults
/// 2. `config_file`
/// 3. `properties` / `property`
/// 4. `store_config`, which replaces everything above
///
/// # Example
///
/// ```no_run
/// use vwise::prelude::*;
///
/// // Production: properties file, read-only replica
/// let db = Vwise::builder()
///     .config_file("/etc/vwise/ids.properties")
///     .access_mode(AccessMode::ReadOnly)
///     .open()?;
///
/// // Testing: explicit configuration
/// let db = Vwise::builder()
///     .store_config(StoreConfig::default())
///     .open()?;
/// # Ok::<(), vwise::Error>(())
/// ```
#[derive(Default)]
pub struct VwiseBuilder {
    config_file: Option<PathBuf>,
    properties: Properties,
    store_config: Option<StoreConfig>,
    access_mode: AccessMode,
    authorizer: Option<Arc<dyn Authorizer>>,
    capacity: Option<usize>,
}

impl VwiseBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read id configuration from a properties file.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overlay a set of properties.
    pub fn properties(mut self, properties: Properties) -> Self {
        self.properties.merge(&properties);
        self
    }

    /// Set a single property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.set(key, value);
        self
    }

    /// Use an explicit configuration, ignoring file and properties.
    pub fn store_config(mut self, config: StoreConfig) -> Self {
        self.store_config = Some(config);
        self
    }

    /// Restrict the executor to reads. Ignored when an authorizer is set.
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    /// Guard the executor with a custom authorizer.
    pub fn authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    /// Expected number of workspaces.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Resolve the configuration without opening a store.
    pub fn resolve_config(&self) -> Result<StoreConfig> {
        if let Some(config) = &self.store_config {
            config.validate()?;
            return Ok(config.clone());
        }

        let mut props = match &self.config_file {
            Some(path) => Properties::load(path)?,
            None => Properties::new(),
        };
        props.merge(&self.properties);

        let config = StoreConfig::from_properties(&props)?;
        config.validate()?;
        Ok(config)
    }

    /// Open the store.
    pub fn open(self) -> Result<Vwise> {
        let config = self.resolve_config()?;

        let store = Arc::new(match self.capacity {
            Some(capacity) => WorkspaceStore::with_capacity(&config, capacity)?,
            None => WorkspaceStore::new(&config)?,
        });

        let authorizer: Arc<dyn Authorizer> = match self.authorizer {
            Some(authorizer) => authorizer,
            None => Arc::new(AccessPolicy::new().access_mode(self.access_mode)),
        };
        let executor = Arc::new(Executor::with_authorizer(store.clone(), authorizer));

        info!(
            workspace_alphabet = %config.workspace_ids.alphabet,
            version_alphabet = %config.version_ids.alphabet,
            access_mode = ?self.access_mode,
            "Opened workspace store"
        );

        Ok(Vwise {
            store,
            executor,
            config,
        })
    }
}

impl std::fmt::Debug for VwiseBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VwiseBuilder")
            .field("config_file", &self.config_file)
            .field("properties", &self.properties)
            .field("store_config", &self.store_config)
            .field("access_mode", &self.access_mode)
            .field("custom_authorizer", &self.authorizer.is_some())
            .finish()
    }
}
