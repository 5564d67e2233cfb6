use core::{
    fmt::{self, Debug},
    ops::{Index, IndexMut},
};

use super::HEIGHT;

/// A handle to a [Node] stored in an [Arena].
///
/// Handles are only ever handed out by the arena that owns the node, and nodes are never freed
/// while the arena lives, so a handle never dangles.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The head always sits in the first slot of the arena.
    pub(crate) const HEAD: NodeId = NodeId(0);
}

/// Forward links of a node, one per level.
pub(crate) type Tower = [Option<NodeId>; HEIGHT];

pub(crate) struct Node {
    pub(crate) key: Vec<u8>,
    pub(crate) val: Vec<u8>,
    height: usize,
    pub(crate) levels: Tower,
}

impl Node {
    pub(crate) fn new(key: Vec<u8>, val: Vec<u8>, height: usize) -> Self {
        assert!(height > 0 && height <= HEIGHT);

        Node {
            key,
            val,
            height,
            levels: [None; HEIGHT],
        }
    }

    /// Constructs the full height tower with an empty key and value that starts every level.
    fn head() -> Self {
        Node::new(Vec::new(), Vec::new(), HEIGHT)
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.val == other.val
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("val", &self.val)
            .field("height", &self.height())
            .field(
                "levels",
                &(0..self.height()).fold(String::new(), |acc, level| {
                    format!("{}{:?}, ", acc, self.levels[level])
                }),
            )
            .finish()
    }
}

/// Owns every node of a list, the head included.
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Arena {
            nodes: vec![Node::head()],
        }
    }

    /// Moves `node` into the arena. Running out of memory aborts through the global
    /// allocation error handler, so a half linked node can never be observed.
    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// The number of real nodes, i.e. excluding the head.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len() - 1
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Arena {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0]
    }
}
