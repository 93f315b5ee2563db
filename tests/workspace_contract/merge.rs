//! Merge Semantics Tests
//!
//! Updates are applied relative to the version they were edited from. Only
//! fields that differ from that baseline overwrite the latest state.

use crate::*;

#[test]
fn test_interleaved_updates_from_stale_baseline() {
    let updated_name = "Updated Workspace";
    let updated_description = "This is an updated workspace description.";
    let updated_name2 = "Another Workspace";
    let updated_description2 = "This is another update.";

    for (backend, repo) in backends() {
        let mut edited = repo.create(sample()).unwrap();
        let original_version = edited.version.clone();

        edited.name = Some(updated_name.into());
        edited.description = Some(updated_description.into());
        let updated = repo.update(edited.clone()).unwrap();

        // still edited from the original version
        edited.name = Some(updated_name2.into());
        let updated2 = repo.update(edited.clone()).unwrap();

        edited.description = Some(updated_description2.into());
        let updated3 = repo.update(edited.clone()).unwrap();

        let versions: std::collections::HashSet<_> = [
            original_version,
            updated.version.clone(),
            updated2.version.clone(),
            updated3.version.clone(),
        ]
        .into_iter()
        .collect();
        assert_eq!(versions.len(), 4, "{}: versions should all differ", backend);

        assert_eq!(updated.name.as_deref(), Some(updated_name), "{}", backend);
        assert_eq!(updated2.name.as_deref(), Some(updated_name2), "{}", backend);
        assert_eq!(updated3.name.as_deref(), Some(updated_name2), "{}", backend);

        assert_eq!(updated.description.as_deref(), Some(updated_description), "{}", backend);
        assert_eq!(updated2.description.as_deref(), Some(updated_description), "{}", backend);
        assert_eq!(updated3.description.as_deref(), Some(updated_description2), "{}", backend);
    }
}

#[test]
fn test_untouched_fields_keep_concurrent_changes() {
    for (backend, repo) in backends() {
        let base = repo.create(sample().with_scope("@team")).unwrap();

        // writer A renames
        repo.update(base.clone().with_name("Renamed")).unwrap();
        // writer B, still on the baseline, only changes the key
        let merged = repo.update(base.clone().with_key("atlas")).unwrap();

        assert_eq!(merged.name.as_deref(), Some("Renamed"), "{}", backend);
        assert_eq!(merged.key.as_deref(), Some("atlas"), "{}", backend);
        assert_eq!(merged.scope.as_deref(), Some("@team"), "{}", backend);
        assert_eq!(merged.description, base.description, "{}", backend);
    }
}

#[test]
fn test_same_field_last_writer_wins() {
    for (backend, repo) in backends() {
        let base = repo.create(sample()).unwrap();

        repo.update(base.clone().with_name("first")).unwrap();
        let last = repo.update(base.clone().with_name("second")).unwrap();

        assert_eq!(last.name.as_deref(), Some("second"), "{}", backend);
    }
}

#[test]
fn test_unchanged_update_still_mints_version() {
    for (backend, repo) in backends() {
        let base = repo.create(sample()).unwrap();
        let same = repo.update(base.clone()).unwrap();

        assert_ne!(same.version, base.version, "{}", backend);
        assert_eq!(same.name, base.name, "{}", backend);
        assert_eq!(same.description, base.description, "{}", backend);
    }
}

#[test]
fn test_clearing_a_field() {
    for (backend, repo) in backends() {
        let base = repo.create(sample().with_scope("@me")).unwrap();

        let mut edited = base.clone();
        edited.scope = None;
        let updated = repo.update(edited).unwrap();

        assert_eq!(updated.scope, None, "{}", backend);
        assert_eq!(updated.name, base.name, "{}", backend);
    }
}

#[test]
fn test_baseline_between_versions_floors() {
    let db = Vwise::new().unwrap();
    let repo = db.store();

    let base = repo.create(sample()).unwrap();
    let v2 = repo.update(base.clone().with_name("two")).unwrap();

    // a version number past the latest reads as the latest
    let codec = vwise::vwise_core::IdObfuscator::new(&db.config().version_ids).unwrap();
    let future = codec.encode(50);
    let id = base.id.clone().unwrap();
    assert_eq!(repo.get_version(&id, &future).unwrap(), Some(v2.clone()));

    // and works as an update baseline
    let merged = repo.update(v2.clone().with_version(future).with_key("k")).unwrap();
    assert_eq!(merged.name.as_deref(), Some("two"));
    assert_eq!(merged.key.as_deref(), Some("k"));
}

#[test]
fn test_baseline_before_first_version_is_invalid() {
    let db = Vwise::new().unwrap();
    let repo = db.store();

    let base = repo.create(sample()).unwrap();
    let codec = vwise::vwise_core::IdObfuscator::new(&db.config().version_ids).unwrap();

    let err = repo.update(base.with_version(codec.encode(0))).unwrap_err();
    assert!(err.is_invalid_argument());
}
