use std::collections::BTreeMap;

use balsa_tree::{AvlMap, Comparator, Error, ReverseOrder};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Generates keys from a range small enough to force collisions.
fn key_strategy() -> impl Strategy<Value = i64> {
    -1_000i64..1_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

// ─── Concrete scenarios ──────────────────────────────────────────────────────

#[test]
fn insert_ten_keys_then_erase_one() {
    let mut map: AvlMap<i32, i32> = AvlMap::new();
    for key in [5, 3, 8, 1, 4, 7, 9, 2, 6, 0] {
        let (_, inserted) = map.insert(key, key * 100);
        assert!(inserted);
    }

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(map.len(), 10);

    let cursor = map.find(&5);
    assert_eq!(map.erase(cursor), Ok((5, 500)));
    assert_eq!(map.find(&5), map.end());
    assert_eq!(map.len(), 9);

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, [0, 1, 2, 3, 4, 6, 7, 8, 9]);
}

#[test]
fn default_insert_through_indexing() {
    let mut map: AvlMap<u32, String> = AvlMap::new();
    assert!(map.is_empty());

    map[&10] = "x".to_string();
    assert_eq!(map.len(), 1);

    let value = map.at_mut(&10).unwrap();
    assert_eq!(value, "x");
    value.push('y');
    assert_eq!(map.at(&10), Ok(&"xy".to_string()));

    assert_eq!(map.at(&11), Err(Error::KeyNotFound));
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn indexing_a_missing_key_panics() {
    let map: AvlMap<u32, u32> = AvlMap::new();
    let _ = map[&1];
}

#[test]
fn duplicate_insert_keeps_the_existing_entry() {
    let mut map: AvlMap<i32, &str> = AvlMap::new();
    map.insert(1, "first");

    let (existing, inserted) = map.insert(1, "second");
    assert!(!inserted);
    assert_eq!(map.value(existing), Ok(&"first"));
    assert_eq!(map.len(), 1);
}

#[test]
fn or_insert_default_finds_or_creates() {
    let mut map: AvlMap<i32, Vec<i32>> = AvlMap::new();
    map.or_insert_default(1).push(10);
    map.or_insert_default(1).push(11);
    assert_eq!(map.len(), 1);
    assert_eq!(map.at(&1), Ok(&vec![10, 11]));
}

// ─── Copy semantics ──────────────────────────────────────────────────────────

#[test]
fn clone_is_deeply_independent() {
    let mut original: AvlMap<i32, String> = AvlMap::new();
    for key in 0..32 {
        original.insert(key, key.to_string());
    }

    let mut copy = original.clone();
    copy.remove(&7);
    copy.insert(100, "hundred".to_string());
    *copy.at_mut(&3).unwrap() = "three!".to_string();

    // The original never noticed.
    assert_eq!(original.len(), 32);
    assert_eq!(original.at(&7), Ok(&"7".to_string()));
    assert_eq!(original.at(&3), Ok(&"3".to_string()));
    assert!(!original.contains_key(&100));

    assert_eq!(copy.len(), 32);
    assert!(!copy.contains_key(&7));
}

#[test]
fn clone_from_replaces_contents_and_retires_cursors() {
    let mut target: AvlMap<i32, &str> = AvlMap::new();
    target.insert(1, "old");
    target.insert(2, "old");
    let stale = target.begin();

    let mut source = AvlMap::new();
    source.insert(10, "new");
    target.clone_from(&source);

    assert_eq!(target.len(), 1);
    assert_eq!(target.at(&10), Ok(&"new"));
    assert!(!target.contains_key(&1));
    assert_eq!(target.key_value(stale), Err(Error::InvalidCursor));

    // Mutating the source afterwards does not leak through.
    source.insert(11, "newer");
    assert!(!target.contains_key(&11));
}

// ─── Orderings ───────────────────────────────────────────────────────────────

#[test]
fn reverse_order_iterates_descending() {
    let map: AvlMap<i32, (), ReverseOrder> =
        (0..10).map(|key| (key, ())).collect();
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(map.first_key_value(), Some((&9, &())));
    assert_eq!(map.last_key_value(), Some((&0, &())));
}

/// Orders (group, name) pairs by group only: a genuine strict weak order
/// where distinct keys can be equivalent.
#[derive(Clone, Copy, Default)]
struct ByGroup;

impl Comparator<(u32, &'static str)> for ByGroup {
    fn less(&self, a: &(u32, &'static str), b: &(u32, &'static str)) -> bool {
        a.0 < b.0
    }
}

#[test]
fn strict_weak_order_equivalence_blocks_inserts() {
    let mut map: AvlMap<(u32, &'static str), i32, ByGroup> = AvlMap::new();
    let (_, inserted) = map.insert((1, "alpha"), 10);
    assert!(inserted);

    // Same group: equivalent under ByGroup even though the pairs differ.
    let (existing, inserted) = map.insert((1, "beta"), 20);
    assert!(!inserted);
    assert_eq!(map.key_value(existing), Ok((&(1, "alpha"), &10)));

    // Lookups hit through equivalence too.
    assert_eq!(map.at(&(1, "anything")), Ok(&10));
    assert_eq!(map.count(&(1, "other")), 1);
    assert_eq!(map.count(&(2, "alpha")), 0);
}

// ─── Iteration and collection traits ─────────────────────────────────────────

#[test]
fn iterators_are_double_ended_and_sized() {
    let map: AvlMap<i32, i32> = (0..10).map(|key| (key, key * 2)).collect();

    let mut iter = map.iter();
    assert_eq!(iter.len(), 10);
    assert_eq!(iter.next(), Some((&0, &0)));
    assert_eq!(iter.next_back(), Some((&9, &18)));
    assert_eq!(iter.len(), 8);

    let forward: Vec<_> = map.keys().copied().collect();
    let mut backward: Vec<_> = map.keys().rev().copied().collect();
    backward.reverse();
    assert_eq!(forward, backward);

    let values: Vec<_> = map.values().copied().collect();
    assert_eq!(values, [0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
}

#[test]
fn into_iter_drains_in_key_order() {
    let map: AvlMap<i32, &str> = [(2, "b"), (1, "a"), (3, "c")].into_iter().collect();
    let entries: Vec<_> = map.into_iter().collect();
    assert_eq!(entries, [(1, "a"), (2, "b"), (3, "c")]);
}

#[test]
fn debug_and_equality() {
    let a: AvlMap<i32, &str> = [(1, "a"), (2, "b")].into_iter().collect();
    let b: AvlMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
    assert_eq!(a, b);
    assert_eq!(format!("{a:?}"), r#"{1: "a", 2: "b"}"#);

    let c: AvlMap<i32, &str> = [(1, "a")].into_iter().collect();
    assert_ne!(a, c);
}

#[test]
fn clear_resets_to_empty() {
    let mut map: AvlMap<i32, i32> = (0..100).map(|key| (key, key)).collect();
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.begin(), map.end());
    assert_eq!(map.iter().count(), 0);

    // The map is fully usable again.
    map.insert(1, 1);
    assert_eq!(map.len(), 1);
}

// ─── Randomized model tests ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    Count(i64),
    FirstKeyValue,
    LastKeyValue,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        5 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => key_strategy().prop_map(MapOp::Count),
        1 => Just(MapOp::FirstKeyValue),
        1 => Just(MapOp::LastKeyValue),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both AvlMap and BTreeMap
    /// and asserts identical results at every step. AvlMap::insert never
    /// overwrites, so the model only inserts into vacant slots.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut avl: AvlMap<i64, i64> = AvlMap::new();
        let mut model: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    let (_, inserted) = avl.insert(*k, *v);
                    prop_assert_eq!(inserted, !model.contains_key(k), "insert({})", k);
                    model.entry(*k).or_insert(*v);
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(avl.remove(k), model.remove(k), "remove({})", k);
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(avl.get(k), model.get(k), "get({})", k);
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(avl.contains_key(k), model.contains_key(k), "contains_key({})", k);
                }
                MapOp::Count(k) => {
                    prop_assert_eq!(avl.count(k), usize::from(model.contains_key(k)), "count({})", k);
                }
                MapOp::FirstKeyValue => {
                    prop_assert_eq!(avl.first_key_value(), model.first_key_value(), "first_key_value");
                }
                MapOp::LastKeyValue => {
                    prop_assert_eq!(avl.last_key_value(), model.last_key_value(), "last_key_value");
                }
            }
            prop_assert_eq!(avl.len(), model.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(avl.is_empty(), model.is_empty());
        }
    }

    /// Iteration order matches BTreeMap after random insertions, both ways.
    #[test]
    fn iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut avl: AvlMap<i64, i64> = AvlMap::new();
        let mut model: BTreeMap<i64, i64> = BTreeMap::new();

        for (k, v) in &entries {
            avl.insert(*k, *v);
            model.entry(*k).or_insert(*v);
        }

        let avl_items: Vec<_> = avl.iter().map(|(&k, &v)| (k, v)).collect();
        let model_items: Vec<_> = model.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_items, &model_items, "iter() mismatch");

        let avl_rev: Vec<_> = avl.iter().rev().map(|(&k, &v)| (k, v)).collect();
        let model_rev: Vec<_> = model.iter().rev().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(&avl_rev, &model_rev, "iter().rev() mismatch");

        let owned: Vec<_> = avl.into_iter().collect();
        let model_owned: Vec<_> = model.into_iter().collect();
        prop_assert_eq!(owned, model_owned, "into_iter() mismatch");
    }

    /// A cursor walk from begin() to end() visits keys in strictly
    /// increasing order and agrees with the backward walk from end().
    #[test]
    fn cursor_walks_agree(keys in proptest::collection::btree_set(key_strategy(), 1..256)) {
        let mut avl: AvlMap<i64, ()> = AvlMap::new();
        for &k in &keys {
            avl.insert(k, ());
        }

        let mut forward = Vec::new();
        let mut cursor = avl.begin();
        while cursor != avl.end() {
            forward.push(*avl.key_value(cursor).unwrap().0);
            cursor = avl.next(cursor).unwrap();
        }
        let expected: Vec<_> = keys.iter().copied().collect();
        prop_assert_eq!(&forward, &expected, "forward walk mismatch");

        let mut backward = Vec::new();
        let mut cursor = avl.end();
        while cursor != avl.begin() {
            cursor = avl.prev(cursor).unwrap();
            backward.push(*avl.key_value(cursor).unwrap().0);
        }
        backward.reverse();
        prop_assert_eq!(&backward, &expected, "backward walk mismatch");
    }
}
