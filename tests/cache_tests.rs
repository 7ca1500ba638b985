//! Integration tests for the shared compile cache.

use std::sync::Arc;
use std::thread;

use dotpath::{lookup_raw, PathCache, PathError};
use serde_json::{json, Value};

fn make_test_tree() -> Value {
    json!({
        "intkey": 123,
        "anyarraykey": [0.1, 1.1, 2, "somestr", {"k1": "v", "k2": 1, "k3": {"ik": 222}}, 5],
        "anymapkey": {"k1": "v", "k2": 1, "k3": {"ik": 2}}
    })
}

/// Test that cached lookups return the same results as raw lookups, for
/// first-time and repeat calls, successes and failures alike.
#[test]
fn test_cache_matches_raw_lookup() {
    let cache = PathCache::new();
    let tree = make_test_tree();
    let paths = [
        "intkey",
        "anyarraykey.@4.k3.ik",
        "anyarraykey.@last",
        "anymapkey.missing",
        "intkey.@0",
    ];

    for _ in 0..2 {
        for path in paths {
            assert_eq!(
                cache.lookup(path, &tree),
                lookup_raw(path, &tree),
                "cached and raw lookup disagree for {}",
                path
            );
        }
    }
}

/// Test that compile errors pass through the cache without being stored.
#[test]
fn test_cache_propagates_compile_errors() {
    let cache = PathCache::new();
    let tree = make_test_tree();

    assert!(matches!(
        cache.lookup("k1.", &tree),
        Err(PathError::WrongPath { .. })
    ));
    assert!(matches!(
        cache.lookup("@art", &tree),
        Err(PathError::InvalidIndex { .. })
    ));
    assert!(cache.is_empty());

    // The same string fails identically on retry.
    assert_eq!(cache.lookup("k1.", &tree), lookup_raw("k1.", &tree));
}

/// Test that one entry is kept per distinct raw string.
#[test]
fn test_cache_grows_per_distinct_path() {
    let cache = PathCache::new();
    let tree = make_test_tree();

    for _ in 0..10 {
        cache.lookup("intkey", &tree).unwrap();
        cache.lookup("anyarraykey.@last", &tree).unwrap();
    }
    assert_eq!(cache.len(), 2);
}

/// Test that concurrent first-use from many threads returns correct
/// results and leaves the cache well-formed.
#[test]
fn test_cache_concurrent_first_use() {
    let cache = Arc::new(PathCache::new());
    let tree = Arc::new(make_test_tree());
    let paths = [
        "intkey",
        "anyarraykey.@4.k3.ik",
        "anyarraykey.@last",
        "anymapkey.k3.ik",
    ];

    let mut handles = Vec::new();
    for worker in 0..8 {
        let cache = Arc::clone(&cache);
        let tree = Arc::clone(&tree);
        handles.push(thread::spawn(move || {
            for round in 0..100 {
                let path = paths[(worker + round) % paths.len()];
                let value = cache.lookup(path, &tree).unwrap();
                match path {
                    "intkey" => assert_eq!(value, 123),
                    "anyarraykey.@4.k3.ik" => assert_eq!(value, 222),
                    "anyarraykey.@last" => assert_eq!(value, 5),
                    "anymapkey.k3.ik" => assert_eq!(value, 2),
                    _ => unreachable!(),
                }
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // Racing first misses may compile twice but store one entry per path.
    assert_eq!(cache.len(), paths.len());
    let tree = make_test_tree();
    for path in paths {
        assert_eq!(cache.lookup(path, &tree), lookup_raw(path, &tree));
    }
}
