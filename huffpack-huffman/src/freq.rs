//! Symbol frequency tallying.

use crate::{ALPHABET_SIZE, EOF_SYMBOL};

/// Occurrence counts for every symbol in the coding alphabet.
///
/// The alphabet covers the 256 byte values plus the synthetic
/// end-of-stream symbol [`EOF_SYMBOL`], which is always counted exactly
/// once so that every stream carries a terminator code.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Tally symbol frequencies over a byte slice.
    ///
    /// The end-of-stream symbol is given a count of one regardless of
    /// the input, so the table is never empty: even a zero-length
    /// input yields a one-symbol alphabet.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in data {
            counts[usize::from(byte)] += 1;
        }
        counts[usize::from(EOF_SYMBOL)] = 1;
        Self { counts }
    }

    /// Get the occurrence count for a symbol.
    pub fn count(&self, symbol: u16) -> u64 {
        self.counts[usize::from(symbol)]
    }

    /// Number of distinct symbols with a nonzero count.
    ///
    /// Always at least 1 (the end-of-stream symbol).
    pub fn symbol_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterate over `(symbol, count)` pairs with nonzero counts, in
    /// ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u16, count))
    }
}
