//! Online Construction (Ukkonen)
//!
//! **State**: the active point `(node, [left, right))`. `symbols[left..right]`
//! is the longest suffix of the processed prefix that is still implicit.
//! - `right` moves once per consumed symbol
//! - `left` moves once per suffix that had to be inserted
//!
//! Each phase tries to extend the active suffix by `symbols[right]`. If the
//! transition already exists the phase stops early: every shorter suffix
//! has it too. Otherwise a leaf is hung (splitting an edge first when the
//! active point is inside one), and the engine hops to the next shorter
//! suffix through a suffix link.
//!
//! Total work is O(N): `left` never exceeds N, and after a hop the walk back
//! down only skips whole edges.

extern crate alloc;
use alloc::vec::Vec;

use crate::alphabet::{self, SENTINEL};
use crate::error::{Error, Result};
use crate::node::{Node, NodeId, LEAF_DEPTH, ROOT};
use crate::tree::SuffixTree;

/// Longest indexable text. A text of `n` symbols needs at most `2n + 2` nodes.
pub const MAX_TEXT_LEN: usize = (NodeId::MAX as usize - 2) / 2;

/// Construction cursor. Lives only inside the builder.
#[derive(Debug, Clone, Copy, Default)]
struct ActivePoint {
    /// Node at, or just below, the end of the active suffix
    node: NodeId,
    left: usize,
    right: usize,
}

/// Incremental suffix tree builder.
///
/// Bytes are consumed one at a time; the tree is kept valid for the prefix
/// seen so far (with implicit suffixes). [`finish`](Self::finish) appends
/// the sentinel, which makes every suffix explicit, and freezes the result.
///
/// # Example
/// ```
/// use alice_suffix::SuffixTreeBuilder;
///
/// let mut builder = SuffixTreeBuilder::new();
/// builder.extend(b"abra")?;
/// builder.push(b'c')?;
/// assert!(builder.push(b'!').is_err());
///
/// let tree = builder.finish();
/// assert_eq!(tree.count(b"a"), 2);
/// # Ok::<(), alice_suffix::Error>(())
/// ```
#[derive(Debug)]
pub struct SuffixTreeBuilder {
    symbols: Vec<u8>,
    nodes: Vec<Node>,
    active: ActivePoint,
    /// Split node still waiting for its suffix link
    pending_link: Option<NodeId>,
}

impl SuffixTreeBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-size for a text of `len` bytes.
    pub fn with_capacity(len: usize) -> Self {
        let len = len.min(MAX_TEXT_LEN);
        let mut nodes = Vec::with_capacity(2 * len + 2);
        nodes.push(Node::root());

        Self {
            symbols: Vec::with_capacity(len + 1),
            nodes,
            active: ActivePoint::default(),
            pending_link: None,
        }
    }

    /// Builder over an already encoded sequence (sentinel included).
    pub(crate) fn from_symbols(symbols: Vec<u8>) -> Self {
        let mut builder = Self::with_capacity(symbols.len().saturating_sub(1));
        builder.symbols = symbols;
        builder.grow();
        builder
    }

    /// Bytes consumed so far
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Consume one byte.
    ///
    /// A rejected byte leaves the builder untouched.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        let position = self.symbols.len();
        if position >= MAX_TEXT_LEN {
            tracing::trace!(position, "text length limit reached");
            return Err(Error::TextTooLong {
                len: position + 1,
                max: MAX_TEXT_LEN,
            });
        }

        let Some(symbol) = alphabet::encode(byte) else {
            tracing::trace!(byte, position, "rejected byte outside alphabet");
            return Err(Error::InvalidSymbol { byte, position });
        };

        self.symbols.push(symbol);
        self.grow();
        Ok(())
    }

    /// Consume a run of bytes, stopping at the first rejected one.
    ///
    /// Bytes before the failure stay in the tree.
    pub fn extend(&mut self, text: &[u8]) -> Result<()> {
        self.symbols.reserve(text.len());
        for &byte in text {
            self.push(byte)?;
        }
        Ok(())
    }

    /// Terminate the text and freeze the tree.
    pub fn finish(mut self) -> SuffixTree {
        self.symbols.push(SENTINEL);
        self.grow();
        self.into_tree()
    }

    pub(crate) fn into_tree(mut self) -> SuffixTree {
        debug_assert!(self.pending_link.is_none());
        count_leaves(&mut self.nodes);

        tracing::debug!(
            symbols = self.symbols.len(),
            nodes = self.nodes.len(),
            leaves = self.nodes[ROOT as usize].leaves,
            "suffix tree built"
        );

        SuffixTree::from_parts(self.symbols, self.nodes)
    }

    /// Run a phase for every symbol not yet processed.
    fn grow(&mut self) {
        while self.active.right < self.symbols.len() {
            self.extend_phase();
            self.active.right += 1;
        }
    }

    /// Extend every implicit suffix by `symbols[right]`.
    fn extend_phase(&mut self) {
        let right = self.active.right;

        while self.active.left <= right {
            let inserted = self.descend_or_create(right);

            if let Some(pending) = self.pending_link.take() {
                let target = self.node(self.active.node).parent;
                self.nodes[pending as usize].suffix_link = Some(target);
            }

            if !inserted {
                // Already present, so are all shorter suffixes.
                break;
            }

            // Hop from the node the new leaf hangs off to the next suffix.
            let mut from = self.node(self.active.node).parent;
            if self.node(from).suffix_link.is_none() {
                self.pending_link = Some(from);
                from = self.node(from).parent;
            }
            debug_assert!(self.node(from).suffix_link.is_some());
            self.active.node = self.node(from).suffix_link.unwrap_or(ROOT);
            self.active.left += 1;

            self.skip_down(right);
        }

        debug_assert!(self.pending_link.is_none());
    }

    /// Walk whole edges until the active node sits at or below depth
    /// `right - left`. Every edge on the way is known to exist.
    fn skip_down(&mut self, right: usize) {
        while self.active.left <= right {
            let node = self.node(self.active.node);
            if node.depth >= right - self.active.left {
                break;
            }

            let symbol = self.symbols[self.active.left + node.depth];
            self.active.node = match node.child(symbol) {
                Some(child) => child,
                None => unreachable!("suffix link target is missing a continuation"),
            };
        }
    }

    /// Try to follow `symbols[right]` from the active point.
    ///
    /// Returns `true` when a leaf had to be created.
    fn descend_or_create(&mut self, right: usize) -> bool {
        let symbol = self.symbols[right];
        let offset = right - self.active.left;
        let mut current = self.active.node;

        let node = self.node(current);
        if node.depth > offset {
            // Mid-edge
            let along = offset - self.node(node.parent).depth;
            if self.symbols[node.edge_start + along] != symbol {
                current = self.split_edge(current, offset, along);
            }
        }

        if self.node(current).depth == offset {
            match self.node(current).child(symbol) {
                Some(child) => current = child,
                None => {
                    let leaf = self.alloc(Node::new(LEAF_DEPTH, right, current));
                    self.nodes[current as usize].set_child(symbol, leaf);
                    self.active.node = leaf;
                    return true;
                }
            }
        }

        self.active.node = current;
        false
    }

    /// Cut the edge into `child` after `along` symbols. Returns the new
    /// internal node, which sits at `depth`.
    fn split_edge(&mut self, child: NodeId, depth: usize, along: usize) -> NodeId {
        let Node {
            parent, edge_start, ..
        } = *self.node(child);

        let mid = self.alloc(Node::new(depth, edge_start, parent));
        let first = self.symbols[edge_start];
        let next = self.symbols[edge_start + along];

        self.nodes[parent as usize].set_child(first, mid);
        self.nodes[mid as usize].set_child(next, child);

        let moved = &mut self.nodes[child as usize];
        moved.parent = mid;
        moved.edge_start += along;

        mid
    }

    #[inline(always)]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    #[inline]
    fn alloc(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }
}

impl Default for SuffixTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill `leaves` bottom-up. Reverse preorder visits children before
/// parents without recursion.
fn count_leaves(nodes: &mut [Node]) {
    let mut order = Vec::with_capacity(nodes.len());
    let mut stack = alloc::vec![ROOT];
    while let Some(id) = stack.pop() {
        order.push(id);
        stack.extend(nodes[id as usize].children.iter().flatten());
    }

    for &id in order.iter().rev() {
        let node = &mut nodes[id as usize];
        if node.is_leaf() {
            node.leaves = 1;
        }
        if id != ROOT {
            let (leaves, parent) = (node.leaves, node.parent);
            nodes[parent as usize].leaves += leaves;
        }
    }
}
