//! Workspace Repository Contract Suite
//!
//! Every test here runs the same scenario against each repository backend:
//!
//! - `store`: the in-memory store, called directly
//! - `remote`: the remote client, speaking JSON through the executor
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole contract
//! cargo test --test workspace_contract
//!
//! # Run the merge scenarios only
//! cargo test --test workspace_contract merge::
//! ```

use std::sync::Arc;

use vwise::prelude::*;

// Test modules
mod concurrency;
mod identifiers;
mod lifecycle;
mod merge;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Install a test-friendly subscriber once. Set `RUST_LOG` to see output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Named repository backends sharing nothing with each other.
pub fn backends() -> Vec<(&'static str, Arc<dyn WorkspaceRepository>)> {
    init_tracing();

    let direct = Vwise::new().expect("Failed to open store");
    let behind_executor = Vwise::new().expect("Failed to open store");

    let store: Arc<dyn WorkspaceRepository> = direct.store().clone();
    let remote: Arc<dyn WorkspaceRepository> = Arc::new(behind_executor.remote_client());
    vec![("store", store), ("remote", remote)]
}

/// The draft used by most scenarios.
pub fn sample() -> WorkspaceMeta {
    WorkspaceMeta::new()
        .with_name("Test Workspace")
        .with_description("This is a test workspace.")
}
