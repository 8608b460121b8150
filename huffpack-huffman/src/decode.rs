//! Decompression: parse the header, walk the tree, emit bytes.

use crate::error::{HuffError, Result};
use crate::header;
use crate::tree::HuffTree;
use crate::EOF_SYMBOL;
use huffpack_core::BitReader;
use std::io::{self, Read, Write};

/// Header facts recovered without decoding the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    /// Distinct symbols in the code tree, end-of-stream included.
    pub symbol_count: usize,
    /// Depth of the code tree, which is also the longest code length.
    pub tree_depth: usize,
    /// Size of the header (magic and tree) in bits.
    pub header_bits: u64,
}

/// Decompress a huffpack stream from `input` into `output`.
///
/// Returns the number of bytes written. Decoding stops at the
/// end-of-stream code; any padding bits after it are ignored. A stream
/// that runs dry before the marker is reported as
/// [`HuffError::TruncatedStream`].
pub fn decompress<R: Read, W: Write>(input: R, output: W) -> Result<u64> {
    let mut reader = BitReader::new(input);
    header::read_magic(&mut reader)?;
    let tree = header::read_tree(&mut reader)?;

    // A single-leaf tree has no edges, so its one code is empty. That
    // is only decodable when the leaf is the end-of-stream symbol: the
    // body then holds nothing at all. Any other symbol could never
    // reach its terminator.
    if let HuffTree::Leaf { symbol, .. } = &tree {
        return if *symbol == EOF_SYMBOL {
            Ok(0)
        } else {
            Err(HuffError::malformed_header(format!(
                "single-leaf tree holds symbol {symbol}, not the end-of-stream symbol"
            )))
        };
    }

    let mut out = io::BufWriter::new(output);
    let mut written = 0u64;
    loop {
        let mut node = &tree;
        let symbol = loop {
            match node {
                HuffTree::Leaf { symbol, .. } => break *symbol,
                HuffTree::Internal { left, right, .. } => {
                    let bit = reader.read_bit().map_err(HuffError::in_body)?;
                    node = if bit { right } else { left };
                }
            }
        };
        if symbol == EOF_SYMBOL {
            break;
        }
        // Tree symbols are range-checked at header decode, so anything
        // short of the end-of-stream symbol is a byte value.
        out.write_all(&[symbol as u8])?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Read only the header of a huffpack stream and describe it.
pub fn inspect<R: Read>(input: R) -> Result<StreamInfo> {
    let mut reader = BitReader::new(input);
    header::read_magic(&mut reader)?;
    let tree = header::read_tree(&mut reader)?;
    Ok(StreamInfo {
        symbol_count: tree.leaf_count(),
        tree_depth: tree.depth(),
        header_bits: reader.bits_read(),
    })
}
