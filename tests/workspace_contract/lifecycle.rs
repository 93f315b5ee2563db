//! Workspace Lifecycle Tests
//!
//! Tests for create, get, get-by-version, update, remove and listing.

use crate::*;

// =============================================================================
// CREATE / GET
// =============================================================================

#[test]
fn test_create_assigns_identity() {
    for (backend, repo) in backends() {
        let ws = sample();
        let created = repo.create(ws.clone()).unwrap();

        assert!(created.id_str().is_some(), "{}: id should be set", backend);
        assert!(created.version_str().is_some(), "{}: version should be set", backend);
        assert_eq!(created.name, ws.name, "{}", backend);
        assert_eq!(created.description, ws.description, "{}", backend);
    }
}

#[test]
fn test_create_ignores_caller_identity() {
    for (backend, repo) in backends() {
        let created = repo
            .create(sample().with_id("chosen").with_version("chosen"))
            .unwrap();

        assert_ne!(created.id.as_deref(), Some("chosen"), "{}", backend);
        assert_ne!(created.version.as_deref(), Some("chosen"), "{}", backend);
    }
}

#[test]
fn test_read_after_create() {
    for (backend, repo) in backends() {
        let created = repo.create(sample()).unwrap();
        let id = created.id.clone().unwrap();

        let retrieved = repo.get(&id).unwrap();
        assert_eq!(retrieved, Some(created), "{}", backend);
    }
}

#[test]
fn test_get_unknown_returns_none() {
    for (backend, repo) in backends() {
        assert_eq!(repo.get("nnnnn").unwrap(), None, "{}", backend);
        assert_eq!(repo.get_version("nnnnn", "mmmmn").unwrap(), None, "{}", backend);
    }
}

#[test]
fn test_get_foreign_id_returns_none() {
    for (backend, repo) in backends() {
        repo.create(sample()).unwrap();
        assert_eq!(repo.get("not-an-id!").unwrap(), None, "{}", backend);
    }
}

// =============================================================================
// UPDATE
// =============================================================================

#[test]
fn test_update_changes_version() {
    let updated_name = "Updated Workspace";
    let updated_description = "This is an updated workspace description.";

    for (backend, repo) in backends() {
        let created = repo.create(sample()).unwrap();
        let id = created.id.clone().unwrap();

        let edited = created
            .clone()
            .with_name(updated_name)
            .with_description(updated_description);
        let updated = repo.update(edited).unwrap();

        assert_eq!(updated.id, created.id, "{}", backend);
        assert_ne!(updated.version, created.version, "{}", backend);
        assert_eq!(updated.name.as_deref(), Some(updated_name), "{}", backend);
        assert_eq!(
            updated.description.as_deref(),
            Some(updated_description),
            "{}",
            backend
        );

        assert_eq!(repo.get(&id).unwrap(), Some(updated), "{}", backend);
    }
}

#[test]
fn test_prior_versions_remain_readable() {
    for (backend, repo) in backends() {
        let created = repo.create(sample()).unwrap();
        let id = created.id.clone().unwrap();
        let version = created.version.clone().unwrap();

        repo.update(created.clone().with_name("Updated Workspace"))
            .unwrap();

        let retrieved = repo.get_version(&id, &version).unwrap();
        assert_eq!(retrieved, Some(created), "{}", backend);
    }
}

#[test]
fn test_update_without_identity_is_invalid() {
    for (backend, repo) in backends() {
        let created = repo.create(sample()).unwrap();

        let mut no_id = created.clone();
        no_id.id = None;
        assert!(
            repo.update(no_id).unwrap_err().is_invalid_argument(),
            "{}",
            backend
        );

        let mut no_version = created.clone();
        no_version.version = Some("".into());
        assert!(
            repo.update(no_version).unwrap_err().is_invalid_argument(),
            "{}",
            backend
        );
    }
}

#[test]
fn test_update_unknown_is_not_found() {
    for (backend, repo) in backends() {
        let err = repo
            .update(sample().with_id("nnnnn").with_version("mmmmn"))
            .unwrap_err();
        assert!(err.is_not_found(), "{}: {:?}", backend, err);
    }
}

// =============================================================================
// REMOVE
// =============================================================================

#[test]
fn test_remove_keeps_history() {
    for (backend, repo) in backends() {
        let created = repo.create(sample()).unwrap();
        let id = created.id.clone().unwrap();
        let version = created.version.clone().unwrap();

        repo.remove(&id).unwrap();

        assert_eq!(repo.get(&id).unwrap(), None, "{}", backend);
        assert_eq!(
            repo.get_version(&id, &version).unwrap(),
            Some(created),
            "{}",
            backend
        );
    }
}

#[test]
fn test_update_after_remove_is_conflict() {
    for (backend, repo) in backends() {
        let created = repo.create(sample()).unwrap();
        repo.remove(created.id.as_deref().unwrap()).unwrap();

        let err = repo.update(created.with_name("late")).unwrap_err();
        assert!(err.is_conflict(), "{}: {:?}", backend, err);
    }
}

#[test]
fn test_remove_unknown_is_noop() {
    for (backend, repo) in backends() {
        assert!(repo.remove("nnnnn").is_ok(), "{}", backend);
    }
}

// =============================================================================
// PURGE
// =============================================================================

#[test]
fn test_purge_discards_history() {
    let db = Vwise::new().unwrap();
    let repo = db.store();

    let created = repo.create(sample()).unwrap();
    let id = created.id.clone().unwrap();
    let version = created.version.clone().unwrap();

    repo.purge(&id).unwrap();

    assert_eq!(repo.get(&id).unwrap(), None);
    assert_eq!(repo.get_version(&id, &version).unwrap(), None);
    assert!(repo.update(created).unwrap_err().is_not_found());
}

#[test]
fn test_purge_through_remote_client_is_unsupported() {
    let db = Vwise::new().unwrap();
    let remote = db.remote_client();

    let created = remote.create(sample()).unwrap();
    let id = created.id.clone().unwrap();

    assert!(remote.purge(&id).unwrap_err().is_unsupported());
    assert_eq!(remote.get(&id).unwrap(), Some(created));
}

// =============================================================================
// LISTING
// =============================================================================

#[test]
fn test_list_excludes_removed_and_is_ordered() {
    for (backend, repo) in backends() {
        let created: Vec<_> = (0..10)
            .map(|i| repo.create(sample().with_key(format!("k{}", i))).unwrap())
            .collect();

        repo.remove(created[3].id.as_deref().unwrap()).unwrap();
        repo.remove(created[7].id.as_deref().unwrap()).unwrap();

        let expected: Vec<_> = created
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 3 && *i != 7)
            .map(|(_, ws)| ws.clone())
            .collect();
        assert_eq!(repo.list_all().unwrap(), expected, "{}", backend);
    }
}

#[test]
fn test_list_reflects_latest_versions() {
    for (backend, repo) in backends() {
        let a = repo.create(sample().with_name("a")).unwrap();
        let b = repo.create(sample().with_name("b")).unwrap();
        let b2 = repo.update(b.with_name("b2")).unwrap();

        assert_eq!(repo.list_all().unwrap(), vec![a, b2], "{}", backend);
    }
}
