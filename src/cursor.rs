//! Incremental Matching
//!
//! A cursor is a position in a finished tree: the node at or just below
//! the position, plus how many symbols have been matched. Feeding one byte
//! at a time lets a caller test "does S plus one more byte occur" without
//! re-walking S.

use crate::alphabet;
use crate::tree::{Locate, SuffixTree};
use crate::view::NodeRef;
use crate::node::{NodeId, ROOT};

/// Query position inside a [`SuffixTree`].
///
/// # Example
/// ```
/// use alice_suffix::SuffixTree;
///
/// let tree = SuffixTree::build("abracadabra")?;
/// let mut cursor = tree.cursor();
///
/// assert!(cursor.advance_all(b"abr"));
/// assert!(!cursor.advance(b'x'));   // failed step leaves the cursor alone
/// assert!(cursor.advance(b'a'));
/// assert_eq!(cursor.count(), 2);
///
/// cursor.reset();
/// assert_eq!(cursor.matched_len(), 0);
/// # Ok::<(), alice_suffix::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    tree: &'a SuffixTree,
    /// Node at the position, or the node the current edge leads into
    node: NodeId,
    matched: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tree: &'a SuffixTree) -> Self {
        Self {
            tree,
            node: ROOT,
            matched: 0,
        }
    }

    /// Back to the root
    #[inline]
    pub fn reset(&mut self) {
        self.node = ROOT;
        self.matched = 0;
    }

    /// Match one more byte. On failure the cursor does not move.
    pub fn advance(&mut self, byte: u8) -> bool {
        let Some(symbol) = alphabet::encode(byte) else {
            return false;
        };
        let node = self.tree.node(self.node);

        if self.matched == node.depth {
            // At a node
            match node.child(symbol) {
                Some(child) => {
                    self.node = child;
                    self.matched += 1;
                    true
                }
                None => false,
            }
        } else {
            // Mid-edge
            let along = self.matched - self.tree.node(node.parent).depth;
            if self.tree.symbols().get(node.edge_start + along) == Some(&symbol) {
                self.matched += 1;
                true
            } else {
                false
            }
        }
    }

    /// Match a run of bytes. Stops at the first mismatch, with the bytes
    /// before it consumed.
    pub fn advance_all(&mut self, pattern: &[u8]) -> bool {
        pattern.iter().all(|&byte| self.advance(byte))
    }

    /// Bytes matched since the last reset
    #[inline]
    pub fn matched_len(&self) -> usize {
        self.matched
    }

    /// Whether the position is an explicit node rather than mid-edge
    #[inline]
    pub fn is_at_node(&self) -> bool {
        self.tree.node(self.node).depth == self.matched
    }

    /// Node at the position, or the one below it when mid-edge
    #[inline]
    pub fn node(&self) -> NodeRef<'a> {
        self.tree.node_ref(self.node)
    }

    /// Occurrences of the matched prefix
    #[inline]
    pub fn count(&self) -> usize {
        self.tree.node(self.node).leaves as usize
    }

    /// Starting positions of the matched prefix
    pub fn locate(&self) -> Locate<'a> {
        Locate::new(self.node())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_by_step() {
        let tree = SuffixTree::build("banana").unwrap();
        let mut cursor = tree.cursor();

        assert!(cursor.is_at_node());
        assert_eq!(cursor.count(), 7);

        assert!(cursor.advance(b'a'));
        assert!(cursor.is_at_node());
        assert_eq!(cursor.count(), 3);

        assert!(cursor.advance(b'n'));
        assert!(!cursor.is_at_node());
        assert_eq!(cursor.count(), 2);

        assert!(cursor.advance(b'a'));
        assert!(cursor.is_at_node());
        assert_eq!(cursor.count(), 2);
        assert_eq!(cursor.matched_len(), 3);
    }

    #[test]
    fn test_failed_step_keeps_position() {
        let tree = SuffixTree::build("banana").unwrap();
        let mut cursor = tree.cursor();

        assert!(cursor.advance_all(b"ban"));
        assert!(!cursor.advance(b'x'));
        assert!(!cursor.advance(b'B'));
        assert_eq!(cursor.matched_len(), 3);
        assert!(cursor.advance_all(b"ana"));
        assert!(!cursor.advance(b'a'));
        assert_eq!(cursor.count(), 1);
    }

    #[test]
    fn test_reset() {
        let tree = SuffixTree::build("abcabc").unwrap();
        let mut cursor = tree.cursor();

        assert!(cursor.advance_all(b"cab"));
        cursor.reset();
        assert_eq!(cursor.matched_len(), 0);
        assert!(cursor.node().is_root());
        assert!(cursor.advance_all(b"abc"));
        assert_eq!(cursor.count(), 2);
    }

    #[test]
    fn test_cannot_step_past_text_end() {
        let tree = SuffixTree::build("ab").unwrap();
        let mut cursor = tree.cursor();

        assert!(cursor.advance_all(b"ab"));
        for byte in b'a'..=b'z' {
            assert!(!cursor.advance(byte));
        }
        assert!(!cursor.advance(0));
    }

    #[test]
    fn test_incremental_extension() {
        let text = b"abcabxabcd";
        let tree = SuffixTree::build(text).unwrap();
        let mut cursor = tree.cursor();

        // Longest prefix of "abcdz" that occurs.
        let longest = b"abcdz".iter().take_while(|&&b| cursor.advance(b)).count();
        assert_eq!(longest, 4);
        assert_eq!(cursor.locate().collect::<Vec<_>>(), vec![6]);
    }
}
