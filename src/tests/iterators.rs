use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::HamtMap;

#[test]
fn iter_empty() {
    let map: HamtMap<i32, i32> = HamtMap::new();
    assert_eq!(map.iter().count(), 0);
}

#[test]
fn iter_visits_every_pair_once() {
    let mut map = HamtMap::new();
    for i in 0_u64..300 {
        map.insert(i, i * 2);
    }

    let collected: HashMap<u64, u64> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(collected.len(), 300);
    for i in 0_u64..300 {
        assert_eq!(collected.get(&i), Some(&(i * 2)));
    }
}

/// Each `iter()` call starts a fresh traversal over the same contents.
#[test]
fn iter_is_restartable() {
    let mut map = HamtMap::new();
    for i in 0..100 {
        map.insert(i, i);
    }

    let first: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    let second: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(first, second);
}

#[test]
fn iter_exact_size() {
    let mut map = HamtMap::new();
    for i in 0..50 {
        map.insert(i, i);
    }

    let mut iter = map.iter();
    assert_eq!(iter.len(), 50);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 48);
}

#[test]
fn keys_and_values() {
    let mut map = HamtMap::new();
    map.insert("a", 1);
    map.insert("b", 2);
    map.insert("c", 3);

    let mut keys: Vec<&str> = map.keys().copied().collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["a", "b", "c"]);

    let mut values: Vec<i32> = map.values().copied().collect();
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn for_loop_over_reference() {
    let mut map = HamtMap::new();
    map.insert(1, 10);
    map.insert(2, 20);

    let mut total = 0;
    for (k, v) in &map {
        total += k * v;
    }
    assert_eq!(total, 10 + 40);
}

/// Iteration crosses collision nodes without skipping entries.
#[test]
fn iter_includes_collision_entries() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Forced(u32);

    impl Hash for Forced {
        fn hash<H: Hasher>(&self, state: &mut H) {
            0_u64.hash(state);
        }
    }

    let mut map = HamtMap::new();
    for i in 0..5 {
        map.insert(Forced(i), i);
    }

    let mut seen: Vec<u32> = map.iter().map(|(k, _)| k.0).collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}
