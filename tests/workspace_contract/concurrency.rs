//! Concurrency Tests
//!
//! Many writers against one repository. Updates to one workspace are
//! serialized; different workspaces proceed independently.

use crate::*;
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

#[test]
fn test_concurrent_field_updates_all_survive() {
    const FIELDS: usize = 4;

    for (backend, repo) in backends() {
        let base = repo.create(sample()).unwrap();
        let id = base.id.clone().unwrap();
        let barrier = Arc::new(Barrier::new(FIELDS));

        let handles: Vec<_> = (0..FIELDS)
            .map(|field| {
                let repo = Arc::clone(&repo);
                let barrier = Arc::clone(&barrier);
                let mut edited = base.clone();
                thread::spawn(move || {
                    match field {
                        0 => edited.scope = Some("@scope".into()),
                        1 => edited.key = Some("key".into()),
                        2 => edited.name = Some("name".into()),
                        _ => edited.description = Some("description".into()),
                    }
                    barrier.wait();
                    repo.update(edited).unwrap().version.unwrap()
                })
            })
            .collect();

        let versions: HashSet<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(versions.len(), FIELDS, "{}", backend);

        let current = repo.get(&id).unwrap().unwrap();
        assert_eq!(current.scope.as_deref(), Some("@scope"), "{}", backend);
        assert_eq!(current.key.as_deref(), Some("key"), "{}", backend);
        assert_eq!(current.name.as_deref(), Some("name"), "{}", backend);
        assert_eq!(current.description.as_deref(), Some("description"), "{}", backend);
    }
}

#[test]
fn test_concurrent_creates_produce_unique_ids() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    for (backend, repo) in backends() {
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let repo = Arc::clone(&repo);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    (0..PER_THREAD)
                        .map(|_| repo.create(sample()).unwrap().id.unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(ids.insert(id), "{}: duplicate id", backend);
            }
        }
        assert_eq!(repo.list_all().unwrap().len(), THREADS * PER_THREAD, "{}", backend);
    }
}

#[test]
fn test_many_writers_on_shuffled_workspaces() {
    const WORKSPACES: usize = 16;
    const THREADS: usize = 8;
    const ROUNDS: usize = 25;

    let db = Vwise::new().unwrap();
    let repo = Arc::clone(db.store());

    let ids: Vec<String> = (0..WORKSPACES)
        .map(|_| repo.create(sample()).unwrap().id.unwrap())
        .collect();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let repo = Arc::clone(&repo);
            let barrier = Arc::clone(&barrier);
            let mut order = ids.clone();
            thread::spawn(move || {
                order.shuffle(&mut thread_rng());
                barrier.wait();
                for round in 0..ROUNDS {
                    for id in &order {
                        let current = repo.get(id).unwrap().unwrap();
                        repo.update(current.with_name(format!("t{}-r{}", t, round)))
                            .unwrap();
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    // one initial version per workspace plus every update
    assert_eq!(
        repo.total_versions(),
        WORKSPACES * (1 + THREADS * ROUNDS)
    );
    for id in &ids {
        let ws = repo.get(id).unwrap().unwrap();
        assert!(ws.name.unwrap().starts_with('t'));
    }
}

#[test]
fn test_reads_during_writes_see_complete_versions() {
    const WRITES: usize = 200;

    let db = Vwise::new().unwrap();
    let repo = Arc::clone(db.store());
    let base = repo.create(sample().with_key("0").with_name("0")).unwrap();
    let id = base.id.clone().unwrap();

    let writer = {
        let repo = Arc::clone(&repo);
        let mut current = base.clone();
        thread::spawn(move || {
            for i in 1..=WRITES {
                let n = i.to_string();
                current = repo
                    .update(current.with_key(n.clone()).with_name(n))
                    .unwrap();
            }
        })
    };

    // key and name are always written together
    for _ in 0..WRITES {
        let ws = repo.get(&id).unwrap().unwrap();
        assert_eq!(ws.key, ws.name);
    }

    writer.join().unwrap();
    let last = repo.get(&id).unwrap().unwrap();
    assert_eq!(last.key.as_deref(), Some(WRITES.to_string().as_str()));
}
