//! Three-way field merge for workspace updates
//!
//! A writer edits from a baseline (`base`). By the time the edit arrives,
//! other writers may have moved the workspace forward (`current`). Only the
//! fields the writer actually changed relative to its baseline are applied on
//! top of `current`:
//!
//! | edited vs base | result |
//! |----------------|--------|
//! | equal          | `current.field` |
//! | different      | `edited.field`  |
//!
//! Concurrent edits to different fields therefore all survive, and a writer
//! that did not touch a field never overwrites someone else's change to it.

use vwise_core::WorkspaceMeta;

/// Merge `edited` into `current` relative to `base`.
///
/// Identity fields (`id`, `version`) are taken from `current`; the caller
/// assigns the new version.
pub fn merge_update(
    edited: &WorkspaceMeta,
    base: &WorkspaceMeta,
    current: &WorkspaceMeta,
) -> WorkspaceMeta {
    let mut updated = current.clone();
    apply_field(&mut updated.scope, &edited.scope, &base.scope);
    apply_field(&mut updated.key, &edited.key, &base.key);
    apply_field(&mut updated.name, &edited.name, &base.name);
    apply_field(&mut updated.description, &edited.description, &base.description);
    updated
}

#[inline]
fn apply_field(target: &mut Option<String>, edited: &Option<String>, base: &Option<String>) {
    if edited != base {
        target.clone_from(edited);
    }
}
