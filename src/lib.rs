//! An ordered map backed by an arena-allocated AVL tree.
//!
//! This crate provides [`AvlMap`], a sorted key-value container that keeps its
//! entries ordered under a caller-supplied comparison rule and exposes
//! bidirectional, owner-checked [`Cursor`]s into the tree:
//!
//! - [`insert`](AvlMap::insert) / [`erase`](AvlMap::erase) /
//!   [`find`](AvlMap::find) - O(log n) mutation and lookup
//! - [`next`](AvlMap::next) / [`prev`](AvlMap::prev) - O(log n) worst-case
//!   bidirectional stepping via parent links, no auxiliary stack
//! - [`at`](AvlMap::at) / [`at_mut`](AvlMap::at_mut) - checked access that
//!   reports [`Error::KeyNotFound`] instead of panicking
//!
//! # Example
//!
//! ```
//! use balsa_tree::AvlMap;
//!
//! let mut scores: AvlMap<&str, u32> = AvlMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Entries iterate in key order.
//! let names: Vec<_> = scores.keys().copied().collect();
//! assert_eq!(names, ["Alice", "Bob", "Carol"]);
//!
//! // Cursors step both ways and survive being copied around.
//! let cursor = scores.find(&"Bob");
//! assert_eq!(scores.key_value(cursor), Ok((&"Bob", &85)));
//! let next = scores.next(cursor).unwrap();
//! assert_eq!(scores.key_value(next), Ok((&"Carol", &92)));
//!
//! // Erasing through a cursor hands the entry back.
//! assert_eq!(scores.erase(cursor), Ok(("Bob", 85)));
//! assert_eq!(scores.len(), 2);
//! ```
//!
//! # Cursors and container identity
//!
//! A [`Cursor`] is a plain value: a node reference plus the identity of the map
//! that produced it. Every dereference or step validates both, so using a
//! cursor with the wrong map, stepping past the end, or stepping before the
//! first entry fails with [`Error::InvalidCursor`] rather than corrupting the
//! tree. [`clear`](AvlMap::clear), `clone_from`, and dropping the map retire
//! its identity, which invalidates every outstanding cursor at once.
//!
//! # Features
//!
//! - **`no_std` compatible** - only requires `alloc`
//! - **Custom orderings** - any [`Comparator`] defining a strict weak order,
//!   with [`NaturalOrder`] (the `Ord` order) as the default
//! - **Deep copies** - `Clone` duplicates the whole tree; the copy shares no
//!   nodes with the original
//!
//! # Implementation
//!
//! The tree is a classic AVL tree: every node caches its subtree height and
//! rotations keep sibling heights within one of each other, bounding all
//! operations at O(log n). Nodes live in a slot arena indexed by
//! niche-optimized handles, so child and parent links are plain indices and
//! rotations relink without moving entries.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod error;
mod raw;

pub mod avl_map;

pub use avl_map::{AvlMap, Cursor};
pub use compare::{Comparator, NaturalOrder, ReverseOrder};
pub use error::{Error, Result};
