//! Construction errors.
//!
//! Queries never fail: a pattern that cannot occur is a normal negative
//! result. Only building the tree can be refused.

use thiserror::Error;

/// Errors raised while building a [`SuffixTree`](crate::SuffixTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The text contains a byte outside `a..=z`.
    #[error("invalid symbol 0x{byte:02x} at position {position}: only `a..=z` can be indexed")]
    InvalidSymbol {
        /// The offending byte.
        byte: u8,
        /// Its offset in the input text.
        position: usize,
    },

    /// The text would overflow the 32-bit node arena.
    #[error("text of {len} symbols exceeds the maximum of {max}")]
    TextTooLong {
        /// Length that was attempted.
        len: usize,
        /// Largest indexable length.
        max: usize,
    },
}

/// Crate result alias.
pub type Result<T> = core::result::Result<T, Error>;
