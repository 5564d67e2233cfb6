mod height;
mod node;

pub(crate) use height::HeightSampler;
pub(crate) use node::{Arena, Node, NodeId};

/// The number of slots in every pointer tower, and the number of levels the head occupies.
pub(crate) const HEIGHT: usize = 1 << 4;

/// The fraction of nodes on level `n` that are also present on level `n + 1`.
pub(crate) const P: f64 = 0.5;

/// Anything that can hand out the height of a freshly inserted node.
///
/// Implementors must return a value in `1..HEIGHT`.
pub(crate) trait GeneratesHeight {
    fn gen_height(&mut self) -> usize;
}

/// Bookkeeping shared by every operation on the list.
pub(crate) struct ListState<G> {
    /// The number of levels currently in use, so searches start at `height - 1`.
    pub(crate) height: usize,
    pub(crate) sampler: G,
}

impl<G> ListState<G> {
    pub(crate) fn new(sampler: G) -> Self {
        ListState {
            height: 1,
            sampler,
        }
    }
}

/// The outcome of walking the list towards a key.
///
/// `prev[level]` is the rightmost node on `level` whose key is strictly smaller than the key that
/// was searched for. Levels the walk never visited point at the head.
pub(crate) struct SearchResult {
    pub(crate) prev: [NodeId; HEIGHT],
    pub(crate) target: Option<NodeId>,
}

impl SearchResult {
    pub(crate) fn new() -> Self {
        SearchResult {
            prev: [NodeId::HEAD; HEIGHT],
            target: None,
        }
    }
}
