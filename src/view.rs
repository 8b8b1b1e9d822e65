//! Read-only node views for custom traversals.
//!
//! Callers never see the arena itself, only `NodeRef` handles borrowed from
//! the tree. Traversals use an explicit stack, so a degenerate text such as
//! `"aaaa…"` cannot exhaust the call stack.

extern crate alloc;
use alloc::vec::Vec;
use core::fmt;

use crate::alphabet;
use crate::node::{NodeId, ROOT};
use crate::tree::SuffixTree;

/// Handle to one node of a finished tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a SuffixTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a SuffixTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Arena index, stable for the life of the tree
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.id == ROOT
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.tree.node(self.id).is_leaf()
    }

    /// Symbols spelled from the root. `None` for leaves, whose edge is
    /// open-ended.
    #[inline]
    pub fn depth(&self) -> Option<usize> {
        let node = self.tree.node(self.id);
        (!node.is_leaf()).then_some(node.depth)
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        (!self.is_root()).then(|| self.tree.node_ref(self.tree.node(self.id).parent))
    }

    /// Same path minus its first symbol. Every internal node has one.
    pub fn suffix_link(&self) -> Option<NodeRef<'a>> {
        self.tree
            .node(self.id)
            .suffix_link
            .map(|id| self.tree.node_ref(id))
    }

    /// Child reached by `byte`, if any.
    pub fn child(&self, byte: u8) -> Option<NodeRef<'a>> {
        let symbol = alphabet::encode(byte)?;
        self.tree
            .node(self.id)
            .child(symbol)
            .map(|id| self.tree.node_ref(id))
    }

    /// Children in symbol order. The sentinel edge comes first and has no
    /// letter.
    pub fn children(&self) -> impl Iterator<Item = (Option<u8>, NodeRef<'a>)> + 'a {
        let tree = self.tree;
        tree.node(self.id)
            .children
            .iter()
            .enumerate()
            .filter_map(move |(symbol, child)| {
                child.map(|id| (alphabet::decode(symbol as u8), tree.node_ref(id)))
            })
    }

    /// Encoded symbols on the edge into this node. A leaf edge ends with
    /// the sentinel.
    pub fn edge(&self) -> &'a [u8] {
        if self.is_root() {
            return &[];
        }
        let node = self.tree.node(self.id);
        let symbols = self.tree.symbols();
        let end = if node.is_leaf() {
            symbols.len()
        } else {
            node.edge_start + node.depth - self.tree.node(node.parent).depth
        };
        &symbols[node.edge_start..end]
    }

    /// Leaves in this subtree, i.e. occurrences of the path to this node
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.tree.node(self.id).leaves as usize
    }

    /// Text position where the suffix of this leaf starts.
    pub fn suffix_start(&self) -> Option<usize> {
        let node = self.tree.node(self.id);
        node.is_leaf()
            .then(|| node.edge_start - self.tree.node(node.parent).depth)
    }

    /// This node and everything below it, parents before children
    pub fn preorder(&self) -> Preorder<'a> {
        Preorder {
            tree: self.tree,
            stack: alloc::vec![self.id],
        }
    }

    /// Leaves below this node, in lexicographic order of their suffixes
    pub fn leaves(&self) -> Leaves<'a> {
        Leaves {
            inner: self.preorder(),
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && core::ptr::eq(self.tree, other.tree)
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("depth", &self.depth())
            .field("leaves", &self.leaf_count())
            .finish()
    }
}

/// Depth-first walk, smallest symbol first.
pub struct Preorder<'a> {
    tree: &'a SuffixTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let children = &self.tree.node(id).children;
        self.stack.extend(children.iter().rev().flatten());
        Some(self.tree.node_ref(id))
    }
}

/// Leaves of a subtree.
pub struct Leaves<'a> {
    inner: Preorder<'a>,
}

impl<'a> Leaves<'a> {
    pub(crate) fn empty(tree: &'a SuffixTree) -> Self {
        Self {
            inner: Preorder {
                tree,
                stack: Vec::new(),
            },
        }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = NodeRef<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|node| node.is_leaf())
    }
}
