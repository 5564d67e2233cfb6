use core::{cmp::Ordering, fmt::Debug};

use rand::{rngs::SmallRng, RngCore};
use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};
use crate::internal::utils::{
    Arena, GeneratesHeight, HeightSampler, ListState, Node, NodeId, SearchResult,
};

/// An ordered map from byte strings to byte strings.
///
/// Keys are ordered by unsigned lexicographic comparison. Every node lives in an arena owned by
/// the list and links to its successors by handle, so the list contains no `unsafe` code.
///
/// The list provides no internal synchronization: [insert](SkipList::insert) takes `&mut self`,
/// so sharing a list between threads requires wrapping it in a lock.
pub struct SkipList<R = SmallRng> {
    nodes: Arena,
    state: ListState<HeightSampler<R>>,
}

impl SkipList<SmallRng> {
    /// Instantiates a new, empty [SkipList](SkipList), seeding its level generator from the
    /// operating system.
    pub fn new() -> Self {
        Self::from_sampler(HeightSampler::from_entropy())
    }
}

impl Default for SkipList<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> SkipList<R>
where
    R: RngCore,
{
    /// Instantiates a new, empty [SkipList](SkipList) that draws node heights from `rng`.
    ///
    /// A seeded generator yields the same layout for the same sequence of inserts.
    pub fn with_rng(rng: R) -> Self {
        Self::from_sampler(HeightSampler::new(rng))
    }

    fn from_sampler(sampler: HeightSampler<R>) -> Self {
        debug!("creating skip list");

        SkipList {
            nodes: Arena::new(),
            state: ListState::new(sampler),
        }
    }

    /// Gets the number of distinct keys in the [SkipList](SkipList).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() < 1
    }

    /// The number of levels currently in use.
    pub fn height(&self) -> usize {
        self.state.height
    }

    /// Inserts a value in the list given a key.
    ///
    /// If the key is already present its value is replaced in place and the old value is
    /// returned.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> Option<Vec<u8>>
    where
        K: Into<Vec<u8>>,
        V: Into<Vec<u8>>,
    {
        self.internal_insert(key.into(), val.into())
    }

    #[instrument(level = "trace", skip(self, val))]
    fn internal_insert(&mut self, key: Vec<u8>, mut val: Vec<u8>) -> Option<Vec<u8>> {
        let insertion_point = self.search(&key);

        if let Some(target) = insertion_point.target {
            core::mem::swap(&mut self.nodes[target].val, &mut val);
            return Some(val);
        }

        let height = self.state.sampler.gen_height();
        let new_node = self.nodes.alloc(Node::new(key, val, height));

        self.link_nodes(new_node, &insertion_point.prev);

        if height > self.state.height {
            trace!(from = self.state.height, to = height, "raising list height");
            self.state.height = height;
        }

        None
    }

    /// Splices `new_node` in right after `prev[level]` on every level of its tower.
    fn link_nodes(&mut self, new_node: NodeId, prev: &[NodeId]) {
        for (level, &prev) in prev.iter().enumerate().take(self.nodes[new_node].height()) {
            self.nodes[new_node].levels[level] = self.nodes[prev].levels[level];
            self.nodes[prev].levels[level] = Some(new_node);
        }
    }

    /// Walks the list from the top most level in use down to level 0, collecting the rightmost
    /// node smaller than `key` on each level, as well as the node holding `key` if there is one.
    ///
    /// Each level resumes from where the level above stopped.
    fn search(&self, key: &[u8]) -> SearchResult {
        let mut result = SearchResult::new();
        let mut curr = NodeId::HEAD;

        for level in (0..self.state.height).rev() {
            while let Some(next) = self.nodes[curr].levels[level] {
                match self.nodes[next].key.as_slice().cmp(key) {
                    Ordering::Less => curr = next,
                    Ordering::Equal => {
                        result.target = Some(next);
                        break;
                    }
                    Ordering::Greater => break,
                }
            }

            result.prev[level] = curr;
        }

        result
    }

    /// Looks up the entry stored under `key`.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, key: &[u8]) -> Result<Entry<'_>> {
        match self.search(key) {
            SearchResult {
                target: Some(node), ..
            } => Ok(Entry {
                node: &self.nodes[node],
            }),
            _ => Err(Error::NotFound),
        }
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.find(key).ok().map(|entry| entry.val())
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.find(key).is_ok()
    }

    fn next_node(&self, node: NodeId, level: usize) -> Option<NodeId> {
        self.nodes[node].levels[level]
    }

    /// Visits every node on `level` in order, starting right after the head.
    pub(crate) fn traverse_level_with<F>(&self, level: usize, mut f: F)
    where
        F: FnMut(NodeId, &Node),
    {
        let mut curr = self.next_node(NodeId::HEAD, level);

        while let Some(node) = curr {
            f(node, &self.nodes[node]);
            curr = self.next_node(node, level);
        }
    }

    /// Visits every key value pair in ascending key order.
    pub(crate) fn traverse_with<F>(&self, mut f: F)
    where
        F: FnMut(&[u8], &[u8]),
    {
        self.traverse_level_with(0, |_, node| f(&node.key, &node.val));
    }
}

impl<R> Debug for SkipList<R>
where
    R: RngCore,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();

        self.traverse_with(|key, val| {
            map.entry(
                &String::from_utf8_lossy(key),
                &String::from_utf8_lossy(val),
            );
        });

        map.finish()
    }
}

/// A borrowed view of a node in a [SkipList](SkipList).
pub struct Entry<'a> {
    node: &'a Node,
}

impl<'a> Entry<'a> {
    pub fn key(&self) -> &'a [u8] {
        &self.node.key
    }

    pub fn val(&self) -> &'a [u8] {
        &self.node.val
    }

    /// The number of levels this entry's node occupies.
    pub fn height(&self) -> usize {
        self.node.height()
    }
}

impl<'a> Debug for Entry<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self.node, f)
    }
}
