//! Suffix Tree Index
//!
//! **Queries**: forward walk from the root, one symbol per step.
//! - Mid-edge: compare against the indexed sequence directly
//! - At a node: follow the child for the symbol
//!
//! Every suffix ends at its own leaf, so the occurrences of a pattern are
//! the leaves below where the walk lands. Leaf counts are stored per node
//! at build time, which keeps `count` at O(M) for a pattern of length M.

extern crate alloc;
use alloc::vec::Vec;

use crate::alphabet;
use crate::builder::{SuffixTreeBuilder, MAX_TEXT_LEN};
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::node::{Node, NodeId, ROOT};
use crate::view::{Leaves, NodeRef};

/// Suffix tree over a lowercase text.
///
/// Built once, then queried read-only.
#[derive(Debug, Clone)]
pub struct SuffixTree {
    /// Encoded text, sentinel last. Every edge points into it.
    symbols: Vec<u8>,
    /// Node arena, root first
    nodes: Vec<Node>,
}

impl SuffixTree {
    /// Build the tree for `text`.
    ///
    /// # Errors
    /// - [`Error::InvalidSymbol`] for any byte outside `a..=z`
    /// - [`Error::TextTooLong`] past [`MAX_TEXT_LEN`]
    ///
    /// # Complexity
    /// - Time: O(N) amortized
    /// - Space: at most `2N + 2` nodes
    ///
    /// # Example
    /// ```
    /// use alice_suffix::SuffixTree;
    ///
    /// let tree = SuffixTree::build("banana")?;
    /// assert_eq!(tree.count(b"ana"), 2);
    /// assert!(SuffixTree::build("Banana").is_err());
    /// # Ok::<(), alice_suffix::Error>(())
    /// ```
    pub fn build(text: impl AsRef<[u8]>) -> Result<Self> {
        let text = text.as_ref();
        if text.len() > MAX_TEXT_LEN {
            return Err(Error::TextTooLong {
                len: text.len(),
                max: MAX_TEXT_LEN,
            });
        }

        let symbols = alphabet::encode_text(text)?;
        Ok(SuffixTreeBuilder::from_symbols(symbols).into_tree())
    }

    pub(crate) fn from_parts(symbols: Vec<u8>, nodes: Vec<Node>) -> Self {
        Self { symbols, nodes }
    }

    /// Check if pattern occurs in the text in O(M)
    ///
    /// The empty pattern is always found. A byte outside `a..=z` never is.
    #[inline]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.cursor().advance_all(pattern)
    }

    /// Count occurrences of a pattern in O(M)
    ///
    /// The empty pattern occurs `text_len() + 1` times (once per suffix).
    ///
    /// # Example
    /// ```
    /// use alice_suffix::SuffixTree;
    ///
    /// let tree = SuffixTree::build("mississippi")?;
    /// assert_eq!(tree.count(b"issi"), 2);
    /// assert_eq!(tree.count(b"xyz"), 0);
    /// # Ok::<(), alice_suffix::Error>(())
    /// ```
    #[inline]
    pub fn count(&self, pattern: &[u8]) -> usize {
        let mut cursor = self.cursor();
        if cursor.advance_all(pattern) {
            cursor.count()
        } else {
            0
        }
    }

    /// Starting positions of a pattern, in lexicographic order of the
    /// suffixes that begin there.
    ///
    /// # Complexity
    /// - O(M + size of the matched subtree)
    pub fn locate(&self, pattern: &[u8]) -> Locate<'_> {
        let mut cursor = self.cursor();
        if cursor.advance_all(pattern) {
            cursor.locate()
        } else {
            Locate::empty(self)
        }
    }

    /// Starting positions of a pattern, sorted ascending.
    pub fn locate_all(&self, pattern: &[u8]) -> Vec<usize> {
        let mut positions: Vec<_> = self.locate(pattern).collect();
        positions.sort_unstable();
        positions
    }

    /// Fresh query cursor at the root
    #[inline]
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// Read-only view of the root
    #[inline]
    pub fn root(&self) -> NodeRef<'_> {
        self.node_ref(ROOT)
    }

    /// Original text length (excluding sentinel)
    #[inline]
    pub fn text_len(&self) -> usize {
        self.symbols.len() - 1
    }

    /// Nodes in the arena, root and leaves included
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// One leaf per suffix: `text_len() + 1`
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.nodes[ROOT as usize].leaves as usize
    }

    /// Index size in bytes (approximate)
    pub fn size_bytes(&self) -> usize {
        self.symbols.capacity() + self.nodes.capacity() * core::mem::size_of::<Node>()
    }

    #[inline(always)]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    #[inline(always)]
    pub(crate) fn node_ref(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef::new(self, id)
    }

    #[inline(always)]
    pub(crate) fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}

/// Iterator over match positions.
///
/// Walks the matched subtree with an explicit stack; no recursion.
pub struct Locate<'a> {
    leaves: Leaves<'a>,
    remaining: usize,
}

impl<'a> Locate<'a> {
    pub(crate) fn new(node: NodeRef<'a>) -> Self {
        Self {
            remaining: node.leaf_count(),
            leaves: node.leaves(),
        }
    }

    fn empty(tree: &'a SuffixTree) -> Self {
        Self {
            leaves: Leaves::empty(tree),
            remaining: 0,
        }
    }
}

impl<'a> Iterator for Locate<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let leaf = self.leaves.next()?;
        self.remaining -= 1;
        leaf.suffix_start()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Locate<'a> {}
