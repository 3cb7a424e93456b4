//! The cursor validity contract: owner checks, sentinel behavior, and the
//! exact set of failing steps.

use balsa_tree::{AvlMap, Error};
use pretty_assertions::assert_eq;

fn sample() -> AvlMap<i32, &'static str> {
    let mut map = AvlMap::new();
    map.insert(2, "two");
    map.insert(1, "one");
    map.insert(3, "three");
    map
}

#[test]
fn empty_map_has_coincident_ends() {
    let map: AvlMap<i32, ()> = AvlMap::new();
    assert_eq!(map.begin(), map.end());
    assert_eq!(map.key_value(map.begin()), Err(Error::InvalidCursor));
    assert_eq!(map.next(map.end()), Err(Error::InvalidCursor));
    assert_eq!(map.prev(map.end()), Err(Error::InvalidCursor));
}

#[test]
fn dereferencing_the_sentinel_fails() {
    let map = sample();
    assert_eq!(map.key_value(map.end()), Err(Error::InvalidCursor));
    assert_eq!(map.value(map.end()), Err(Error::InvalidCursor));
}

#[test]
fn stepping_off_either_side_fails() {
    let map = sample();

    // next() on the last entry yields end(); next() on end() fails.
    let last = map.find(&3);
    assert_eq!(map.next(last), Ok(map.end()));
    assert_eq!(map.next(map.end()), Err(Error::InvalidCursor));

    // prev() on end() yields the maximum; prev() on begin() fails.
    let back_from_end = map.prev(map.end()).unwrap();
    assert_eq!(map.key_value(back_from_end), Ok((&3, &"three")));
    assert_eq!(map.prev(map.begin()), Err(Error::InvalidCursor));
}

#[test]
fn next_and_prev_are_inverses_between_the_ends() {
    let map: AvlMap<i32, i32> = (0..20).map(|key| (key, key)).collect();

    let mut cursor = map.next(map.begin()).unwrap();
    let last = map.prev(map.end()).unwrap();
    while cursor != last {
        assert_eq!(map.next(map.prev(cursor).unwrap()), Ok(cursor));
        assert_eq!(map.prev(map.next(cursor).unwrap()), Ok(cursor));
        cursor = map.next(cursor).unwrap();
    }
}

#[test]
fn foreign_cursors_are_rejected() {
    let mut ours = sample();
    let theirs = sample();

    let foreign = theirs.find(&2);
    assert_eq!(ours.key_value(foreign), Err(Error::InvalidCursor));
    assert_eq!(ours.value(foreign), Err(Error::InvalidCursor));
    assert_eq!(ours.value_mut(foreign), Err(Error::InvalidCursor));
    assert_eq!(ours.next(foreign), Err(Error::InvalidCursor));
    assert_eq!(ours.prev(foreign), Err(Error::InvalidCursor));
    assert_eq!(ours.erase(foreign), Err(Error::InvalidCursor));

    // Even the sentinels are owned.
    assert_ne!(ours.end(), theirs.end());
    assert_eq!(ours.erase(theirs.end()), Err(Error::InvalidCursor));

    // A rejected erase left the map untouched.
    assert_eq!(ours.len(), 3);
    assert_eq!(theirs.len(), 3);
}

#[test]
fn cursors_from_clones_do_not_transfer() {
    let original = sample();
    let copy = original.clone();

    assert_ne!(original.end(), copy.end());
    assert_eq!(copy.key_value(original.find(&1)), Err(Error::InvalidCursor));
    assert_eq!(original.key_value(copy.find(&1)), Err(Error::InvalidCursor));
}

#[test]
fn erase_through_the_sentinel_fails() {
    let mut map = sample();
    assert_eq!(map.erase(map.end()), Err(Error::InvalidCursor));
    assert_eq!(map.len(), 3);
}

#[test]
fn erased_entries_leave_dangling_cursors() {
    let mut map = sample();
    let cursor = map.find(&2);
    let copy = cursor;

    assert_eq!(map.erase(cursor), Ok((2, "two")));

    // Both the used cursor and its copy now dangle and are rejected.
    assert_eq!(map.key_value(cursor), Err(Error::InvalidCursor));
    assert_eq!(map.erase(copy), Err(Error::InvalidCursor));
    assert_eq!(map.len(), 2);
}

#[test]
fn clear_invalidates_every_cursor() {
    let mut map = sample();
    let entry = map.find(&1);
    let sentinel = map.end();

    map.clear();
    assert_eq!(map.key_value(entry), Err(Error::InvalidCursor));
    assert_eq!(map.next(entry), Err(Error::InvalidCursor));
    // The old sentinel belongs to the retired incarnation.
    assert_ne!(sentinel, map.end());
    assert_eq!(map.prev(sentinel), Err(Error::InvalidCursor));
}

#[test]
fn cursors_survive_unrelated_mutation() {
    let mut map = sample();
    let cursor = map.find(&2);

    // Inserting and erasing elsewhere never moves the node.
    for key in 10..40 {
        map.insert(key, "filler");
    }
    for key in 10..30 {
        map.remove(&key);
    }

    assert_eq!(map.key_value(cursor), Ok((&2, &"two")));
}

#[test]
fn insert_returns_a_live_cursor() {
    let mut map: AvlMap<i32, i32> = AvlMap::new();
    let (cursor, inserted) = map.insert(7, 70);
    assert!(inserted);
    assert_eq!(map.key_value(cursor), Ok((&7, &70)));

    *map.value_mut(cursor).unwrap() = 71;
    assert_eq!(map.at(&7), Ok(&71));

    // The same cursor comes back from find().
    assert_eq!(map.find(&7), cursor);
}

#[test]
fn cursor_equality_is_position_and_owner() {
    let map = sample();
    assert_eq!(map.find(&1), map.begin());
    assert_ne!(map.find(&1), map.find(&2));
    assert_eq!(map.find(&99), map.end());

    let a = map.next(map.begin()).unwrap();
    let b = map.prev(map.find(&3)).unwrap();
    assert_eq!(a, b);
}
