//! Volume uniqueness tests for identifier generation.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use cuid2::{is_valid, Registry, DEFAULT_LENGTH};

#[test]
fn test_sequential_generation_is_unique() {
    let registry = Registry::new();
    let handle = registry.start(Some("sequential")).unwrap();
    let count = 50_000;

    let mut seen = HashSet::with_capacity(count);
    for _ in 0..count {
        let id = registry.generate(DEFAULT_LENGTH, &handle).unwrap();
        assert!(is_valid(&id), "{id} should be valid");
        assert!(seen.insert(id), "duplicate identifier generated");
    }

    assert_eq!(seen.len(), count);
    assert_eq!(
        registry.get(&handle).unwrap().counter().peek(),
        count as u64
    );
}

#[test]
fn test_concurrent_instances_produce_no_duplicates() {
    let registry = Arc::new(Registry::new());
    let instances = 4;
    let per_instance = 250_000;

    let workers: Vec<_> = (0..instances)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let handle = registry
                .start(Some(format!("worker-{i}").as_str()))
                .unwrap();
            thread::spawn(move || {
                let instance = registry.get(&handle).unwrap();
                (0..per_instance)
                    .map(|_| instance.generate(DEFAULT_LENGTH).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::with_capacity(instances * per_instance);
    for worker in workers {
        for id in worker.join().unwrap() {
            assert!(seen.insert(id), "duplicate identifier across instances");
        }
    }

    assert_eq!(seen.len(), instances * per_instance);
}

#[test]
fn test_concurrent_callers_share_one_instance() {
    let registry = Arc::new(Registry::new());
    let handle = registry.start(Some("shared")).unwrap();
    let threads = 8;
    let per_thread = 5_000;

    let workers: Vec<_> = (0..threads)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let handle = handle.clone();
            thread::spawn(move || {
                (0..per_thread)
                    .map(|_| registry.generate(DEFAULT_LENGTH, &handle).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let ids: HashSet<_> = workers
        .into_iter()
        .flat_map(|w| w.join().unwrap())
        .collect();

    assert_eq!(ids.len(), threads * per_thread);
    assert_eq!(
        registry.get(&handle).unwrap().counter().peek(),
        (threads * per_thread) as u64
    );
}

#[test]
fn test_restart_keeps_identifiers_distinct() {
    let registry = Registry::new();
    let handle = registry.start(Some("restarted")).unwrap();

    let before: HashSet<_> = (0..1_000)
        .map(|_| registry.generate(DEFAULT_LENGTH, &handle).unwrap())
        .collect();
    registry.restart(&handle).unwrap();
    let after: HashSet<_> = (0..1_000)
        .map(|_| registry.generate(DEFAULT_LENGTH, &handle).unwrap())
        .collect();

    assert_eq!(before.len(), 1_000);
    assert_eq!(after.len(), 1_000);
    assert!(before.is_disjoint(&after));
}
