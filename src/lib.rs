//! # ALICE-Suffix
//!
//! **Online suffix tree (Ukkonen) for lowercase text**
//!
//! > "Every substring is a path. Count(Pattern) -> O(Pattern_Length) independent of Corpus Size."
//!
//! ## Architecture
//!
//! - **Arena Nodes**: one `Vec`, `u32` indices, edges as ranges into the text
//! - **Online Build**: one phase per symbol, suffix links with deferred assignment
//! - **Leaf Annotation**: per-node leaf counts make `count` a pure walk
//!
//! ## Performance
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Build | **O(N)** amortized | ≤ 2N + 2 nodes |
//! | Contains | **O(M)** | O(1) |
//! | Count | **O(M)** | O(1) |
//! | Locate | O(M + subtree) | O(depth of stack) |
//!
//! ## Alphabet
//!
//! Only `a..=z` can be indexed; anything else is refused at build time with
//! [`Error::InvalidSymbol`]. Queries never fail: a pattern with a foreign
//! byte simply does not occur, and the empty pattern occurs once per suffix.
//!
//! ## Example
//!
//! ```
//! use alice_suffix::SuffixTree;
//!
//! let tree = SuffixTree::build("banana")?;
//!
//! // Count - O(pattern_length), NOT O(text_length)!
//! assert_eq!(tree.count(b"ana"), 2);
//! assert_eq!(tree.count(b"ban"), 1);
//!
//! // Check existence
//! assert!(tree.contains(b"banana"));
//! assert!(!tree.contains(b"bananas"));
//!
//! // Locate positions
//! assert_eq!(tree.locate_all(b"na"), vec![2, 4]);
//! # Ok::<(), alice_suffix::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod alphabet;
pub mod builder;
pub mod cursor;
pub mod error;
pub mod node;
pub mod tree;
pub mod view;

pub use builder::{SuffixTreeBuilder, MAX_TEXT_LEN};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use tree::{Locate, SuffixTree};
pub use view::{Leaves, NodeRef, Preorder};

/// Version
pub const VERSION: &str = "0.1.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_search() {
        let tree = SuffixTree::build("abracadabra").unwrap();

        assert_eq!(tree.count(b"abra"), 2);
        assert_eq!(tree.count(b"bra"), 2);
        assert_eq!(tree.count(b"a"), 5);
        assert_eq!(tree.count(b"xyz"), 0);
    }

    #[test]
    fn test_locate() {
        let tree = SuffixTree::build("abracadabra").unwrap();

        let mut positions: Vec<_> = tree.locate(b"abra").collect();
        positions.sort();
        assert_eq!(positions, vec![0, 7]);
    }

    #[test]
    fn test_empty_pattern() {
        let text = b"hello";
        let tree = SuffixTree::build(text).unwrap();

        // Empty pattern matches every suffix
        assert_eq!(tree.count(b""), text.len() + 1);
    }

    #[test]
    fn test_full_text_match() {
        let text = b"exactmatch";
        let tree = SuffixTree::build(text).unwrap();

        assert_eq!(tree.count(text), 1);
    }

    #[test]
    fn test_builder_and_batch_agree() {
        let mut builder = SuffixTreeBuilder::with_capacity(11);
        builder.extend(b"mississippi").unwrap();
        let online = builder.finish();

        assert_eq!(online.count(b"ss"), 2);
        assert_eq!(online.leaf_count(), 12);
        assert_eq!(online.root().leaf_count(), online.count(b""));
    }
}
