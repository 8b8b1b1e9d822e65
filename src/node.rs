//! Node Arena
//!
//! Nodes live in one `Vec` and refer to each other by index. Children are
//! the owning relation; `parent` and `suffix_link` are plain back-indices.
//! Dropping the arena drops the whole tree at once.
//!
//! An edge is never stored as a string. The edge into a node spells
//! `symbols[edge_start .. edge_start + (depth - parent.depth)]`, and a leaf
//! edge runs to the end of whatever has been processed so far.

use crate::alphabet::SYMBOL_COUNT;

/// Index of a node in the arena
pub type NodeId = u32;

/// The root is always the first node
pub const ROOT: NodeId = 0;

/// Depth marker for leaves ("unbounded")
pub const LEAF_DEPTH: usize = usize::MAX;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Symbols spelled from the root, or `LEAF_DEPTH`
    pub depth: usize,
    /// First symbol of the incoming edge
    pub edge_start: usize,
    pub parent: NodeId,
    pub children: [Option<NodeId>; SYMBOL_COUNT],
    pub suffix_link: Option<NodeId>,
    /// Leaves in this subtree; filled in once construction is done
    pub leaves: u32,
}

impl Node {
    pub fn root() -> Self {
        Self {
            depth: 0,
            edge_start: 0,
            parent: ROOT,
            children: [None; SYMBOL_COUNT],
            suffix_link: Some(ROOT),
            leaves: 0,
        }
    }

    pub fn new(depth: usize, edge_start: usize, parent: NodeId) -> Self {
        Self {
            depth,
            edge_start,
            parent,
            children: [None; SYMBOL_COUNT],
            suffix_link: None,
            leaves: 0,
        }
    }

    #[inline(always)]
    pub fn child(&self, symbol: u8) -> Option<NodeId> {
        self.children[symbol as usize]
    }

    #[inline(always)]
    pub fn set_child(&mut self, symbol: u8, id: NodeId) {
        self.children[symbol as usize] = Some(id);
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.depth == LEAF_DEPTH
    }
}
