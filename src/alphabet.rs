//! Symbol Encoding
//!
//! The tree works on small integers, not bytes. `a..=z` map to `1..=26`
//! and `0` is reserved for the sentinel, appended exactly once at the end
//! of the indexed sequence. Because the sentinel never occurs anywhere
//! else, every suffix ends at its own leaf, which is what makes
//! leaf counting equal occurrence counting.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Terminal symbol (lexicographically smallest, unique in the sequence)
pub const SENTINEL: u8 = 0;

/// Letters that can be indexed
pub const ALPHABET_SIZE: usize = 26;

/// Distinct symbols including the sentinel (child slots per node)
pub const SYMBOL_COUNT: usize = ALPHABET_SIZE + 1;

/// Map a byte to its symbol. Anything outside `a..=z` is `None`.
#[inline(always)]
pub fn encode(byte: u8) -> Option<u8> {
    match byte {
        b'a'..=b'z' => Some(byte - b'a' + 1),
        _ => None,
    }
}

/// Map a symbol back to its byte. The sentinel has no byte.
#[inline(always)]
pub fn decode(symbol: u8) -> Option<u8> {
    match symbol {
        1..=26 => Some(symbol - 1 + b'a'),
        _ => None,
    }
}

/// Encode a whole text and append the sentinel.
///
/// Fails on the first byte outside the alphabet.
pub fn encode_text(text: &[u8]) -> Result<Vec<u8>> {
    let mut symbols = Vec::with_capacity(text.len() + 1);
    for (position, &byte) in text.iter().enumerate() {
        let symbol = encode(byte).ok_or(Error::InvalidSymbol { byte, position })?;
        symbols.push(symbol);
    }
    symbols.push(SENTINEL);
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_encode_range() {
        assert_eq!(encode(b'a'), Some(1));
        assert_eq!(encode(b'z'), Some(26));
        assert_eq!(encode(b'A'), None);
        assert_eq!(encode(b' '), None);
        assert_eq!(encode(0), None);
    }

    #[test]
    fn test_decode_inverts_encode() {
        for byte in b'a'..=b'z' {
            let symbol = encode(byte).unwrap();
            assert_ne!(symbol, SENTINEL);
            assert_eq!(decode(symbol), Some(byte));
        }
        assert_eq!(decode(SENTINEL), None);
        assert_eq!(decode(27), None);
    }

    #[test]
    fn test_encode_text_appends_sentinel() {
        assert_eq!(encode_text(b"banana").unwrap(), vec![2, 1, 14, 1, 14, 1, 0]);
        assert_eq!(encode_text(b"").unwrap(), vec![SENTINEL]);
    }

    #[test]
    fn test_encode_text_reports_position() {
        assert_eq!(
            encode_text(b"abc-d"),
            Err(Error::InvalidSymbol {
                byte: b'-',
                position: 3
            })
        );
    }
}
