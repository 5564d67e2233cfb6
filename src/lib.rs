//! An arena backed skip list keyed by byte strings.
//!
//! The purpose of this crate is to provide the ordered in-memory map a storage engine builds its
//! memtables and index layers on: expected `O(log n)` inserts and point lookups, without the
//! rebalancing of a strict balanced tree.
//!
//! ```
//! use skippy_map::{Error, SkipList};
//!
//! let mut list = SkipList::new();
//!
//! list.insert("hello", "world");
//! list.insert("blue", "planat");
//!
//! assert_eq!(list.find(b"hello").unwrap().val(), b"world");
//! assert_eq!(list.find(b"nope").unwrap_err(), Error::NotFound);
//! ```
#![warn(
    // missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
mod error;
mod internal;
pub mod skiplist;

pub use error::{Error, Result};
pub use skiplist::{Entry, OrderedMap, SkipList};

#[cfg(test)]
mod proptests;
