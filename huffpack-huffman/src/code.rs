//! Per-symbol codes derived from the tree.

use crate::tree::HuffTree;
use crate::ALPHABET_SIZE;
use huffpack_core::BitWriter;
use std::io::{self, Write};

/// A single prefix-free code: a bit pattern and its length.
///
/// Bits are stored right-aligned, with the first (root-side) bit in
/// the most significant position of the `len`-bit value. The pattern
/// lives in a `u128`: skewed weights can push codes past 64 bits, but
/// a code of depth d needs a total weight of at least the (d+2)-th
/// Fibonacci number, which exceeds any `u64` tally near depth 93, so
/// 128 bits always suffice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Code {
    bits: u128,
    len: u8,
}

impl Code {
    /// The empty code (zero bits).
    ///
    /// Used both as the placeholder for symbols absent from the tree
    /// and as the real code of the sole symbol of a single-leaf tree.
    pub const EMPTY: Code = Code { bits: 0, len: 0 };

    /// Length of this code in bits.
    pub fn len(&self) -> u8 {
        self.len
    }

    /// True if this code has no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extend this code by one bit on the leaf side.
    fn push(self, bit: bool) -> Self {
        Code {
            bits: (self.bits << 1) | u128::from(bit),
            len: self.len + 1,
        }
    }

    /// Write this code to a bit writer, root-side bit first.
    pub fn write_to<W: Write>(&self, writer: &mut BitWriter<W>) -> io::Result<()> {
        let mut remaining = self.len;
        while remaining > 0 {
            let take = remaining.min(32);
            let shift = remaining - take;
            let chunk = ((self.bits >> shift) & ((1u128 << take) - 1)) as u32;
            writer.write_bits(chunk, take)?;
            remaining -= take;
        }
        Ok(())
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in (0..self.len).rev() {
            let bit = (self.bits >> i) & 1;
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

/// The complete symbol-to-code mapping for one tree.
#[derive(Debug, Clone)]
pub struct CodeBook {
    codes: [Code; ALPHABET_SIZE],
}

impl CodeBook {
    /// Derive the code for every leaf of the tree.
    ///
    /// A single-leaf tree assigns its symbol the empty code; such a
    /// stream carries no body bits before the terminator.
    pub fn from_tree(tree: &HuffTree) -> Self {
        let mut codes = [Code::EMPTY; ALPHABET_SIZE];
        Self::walk(tree, Code::EMPTY, &mut codes);
        CodeBook { codes }
    }

    fn walk(node: &HuffTree, prefix: Code, codes: &mut [Code; ALPHABET_SIZE]) {
        match node {
            HuffTree::Leaf { symbol, .. } => {
                codes[usize::from(*symbol)] = prefix;
            }
            HuffTree::Internal { left, right, .. } => {
                Self::walk(left, prefix.push(false), codes);
                Self::walk(right, prefix.push(true), codes);
            }
        }
    }

    /// Get the code for a symbol.
    ///
    /// Symbols absent from the tree map to [`Code::EMPTY`]; callers
    /// only ever look up symbols that were tallied into the tree.
    pub fn get(&self, symbol: u16) -> Code {
        self.codes[usize::from(symbol)]
    }

    /// Length in bits of the longest assigned code.
    pub fn max_len(&self) -> u8 {
        self.codes.iter().map(|c| c.len()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;
    use crate::EOF_SYMBOL;

    fn book_for(data: &[u8]) -> CodeBook {
        let freq = FrequencyTable::from_bytes(data);
        let tree = HuffTree::from_frequencies(&freq);
        CodeBook::from_tree(&tree)
    }

    #[test]
    fn test_aab_codes() {
        let book = book_for(b"aab");
        assert_eq!(book.get(b'a' as u16).to_string(), "0");
        assert_eq!(book.get(b'b' as u16).to_string(), "10");
        assert_eq!(book.get(EOF_SYMBOL).to_string(), "11");
    }

    #[test]
    fn test_prefix_free() {
        let book = book_for(b"abracadabra abracadabra");
        let freq = FrequencyTable::from_bytes(b"abracadabra abracadabra");
        let codes: Vec<String> = freq
            .iter()
            .map(|(symbol, _)| book.get(symbol).to_string())
            .collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn test_single_leaf_gets_empty_code() {
        let book = book_for(b"");
        assert!(book.get(EOF_SYMBOL).is_empty());
        assert_eq!(book.max_len(), 0);
    }

    #[test]
    fn test_heavier_symbols_get_shorter_codes() {
        let mut data = Vec::new();
        data.extend(std::iter::repeat_n(b'x', 100));
        data.extend(std::iter::repeat_n(b'y', 10));
        data.push(b'z');
        let book = book_for(&data);
        assert!(book.get(b'x' as u16).len() <= book.get(b'y' as u16).len());
        assert!(book.get(b'y' as u16).len() <= book.get(b'z' as u16).len());
    }

    #[test]
    fn test_code_write_to_bitwriter() {
        let book = book_for(b"aab");
        let mut out = Vec::new();
        {
            let mut writer = BitWriter::new(&mut out);
            // a a b EOF -> 0 0 10 11
            book.get(b'a' as u16).write_to(&mut writer).unwrap();
            book.get(b'a' as u16).write_to(&mut writer).unwrap();
            book.get(b'b' as u16).write_to(&mut writer).unwrap();
            book.get(EOF_SYMBOL).write_to(&mut writer).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(out, vec![0b0010_1100]);
    }
}
