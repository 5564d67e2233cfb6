use rand::rngs::SmallRng;

use crate::error::Result;

pub use crate::internal::skiplist::{Entry, SkipList};

/// The operations an ordered, byte keyed map offers to the code embedding it.
pub trait OrderedMap {
    type Entry<'a>
    where
        Self: 'a;

    fn new() -> Self;

    /// Inserts `value` under `key`, returning the value it replaced.
    fn insert(&mut self, key: Vec<u8>, value: Vec<u8>) -> Option<Vec<u8>>;

    fn find<'a>(&'a self, key: &[u8]) -> Result<Self::Entry<'a>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() < 1
    }
}

impl OrderedMap for SkipList<SmallRng> {
    type Entry<'a> = Entry<'a>;

    fn new() -> Self {
        SkipList::new()
    }

    fn insert(&mut self, key: Vec<u8>, value: Vec<u8>) -> Option<Vec<u8>> {
        SkipList::insert(self, key, value)
    }

    fn find<'a>(&'a self, key: &[u8]) -> Result<Self::Entry<'a>> {
        SkipList::find(self, key)
    }

    fn len(&self) -> usize {
        SkipList::len(self)
    }
}
