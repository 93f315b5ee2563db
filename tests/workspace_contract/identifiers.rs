//! Identifier Tests
//!
//! Ids are opaque strings whose decoded order follows creation order.

use crate::*;
use std::collections::HashSet;
use vwise::vwise_core::IdObfuscator;

#[test]
fn test_ids_are_unique_and_ordered() {
    let db = Vwise::new().unwrap();
    let codec = IdObfuscator::new(&db.config().workspace_ids).unwrap();

    let ids: Vec<String> = (0..200)
        .map(|_| db.create(sample()).unwrap().id.unwrap())
        .collect();

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());

    let decoded: Vec<u64> = ids.iter().map(|id| codec.decode(id).unwrap()).collect();
    assert!(decoded.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_ids_respect_min_length_and_alphabet() {
    let db = Vwise::builder()
        .property("ids.workspaces.obfuscate.alphabet", "abcdef")
        .property("ids.workspaces.obfuscate.min_length", "6")
        .open()
        .unwrap();

    for _ in 0..50 {
        let id = db.create(sample()).unwrap().id.unwrap();
        assert!(id.chars().count() >= 6, "{}", id);
        assert!(id.chars().all(|c| "abcdef".contains(c)), "{}", id);
    }
}

#[test]
fn test_default_ids_do_not_reveal_sequence() {
    let db = Vwise::new().unwrap();
    let a = db.create(sample()).unwrap().id.unwrap();
    let b = db.create(sample()).unwrap().id.unwrap();

    // consecutive sequence numbers differ in their reversed high bits
    assert_ne!(a.chars().next(), b.chars().next());
}

#[test]
fn test_version_ids_restart_per_workspace() {
    let db = Vwise::new().unwrap();
    let a = db.create(sample()).unwrap();
    let b = db.create(sample()).unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(a.version, b.version);
}
