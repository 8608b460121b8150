//! Stream header: magic number and preorder tree serialization.
//!
//! A huffpack stream opens with a 32-bit magic number followed by the
//! code tree, written in preorder: an internal node is a single 0 bit
//! followed by its left and right subtrees, and a leaf is a single 1
//! bit followed by the symbol in [`SYMBOL_BITS`] bits. Nine bits per
//! symbol cover the 256 byte values plus the end-of-stream symbol.

use crate::error::{HuffError, Result};
use crate::tree::HuffTree;
use crate::{ALPHABET_SIZE, MAGIC, SYMBOL_BITS};
use huffpack_core::{BitReader, BitWriter};
use std::io::{self, Read, Write};

/// Depth cap while decoding a tree from a header.
///
/// A well-formed tree over a 257-symbol alphabet is at most 256 edges
/// deep. Anything deeper is corrupt input and would otherwise recurse
/// without bound.
const MAX_TREE_DEPTH: usize = 256;

/// Write the magic number.
pub fn write_magic<W: Write>(writer: &mut BitWriter<W>) -> io::Result<()> {
    writer.write_bits(MAGIC, 32)
}

/// Read and verify the magic number.
pub fn read_magic<R: Read>(reader: &mut BitReader<R>) -> Result<()> {
    let found = reader.read_bits(32).map_err(HuffError::in_header)?;
    if found != MAGIC {
        return Err(HuffError::BadMagic {
            expected: MAGIC,
            found,
        });
    }
    Ok(())
}

/// Serialize the code tree in preorder.
pub fn write_tree<W: Write>(tree: &HuffTree, writer: &mut BitWriter<W>) -> io::Result<()> {
    match tree {
        HuffTree::Leaf { symbol, .. } => {
            writer.write_bit(true)?;
            writer.write_bits(u32::from(*symbol), SYMBOL_BITS)
        }
        HuffTree::Internal { left, right, .. } => {
            writer.write_bit(false)?;
            write_tree(left, writer)?;
            write_tree(right, writer)
        }
    }
}

/// Deserialize a code tree from its preorder encoding.
///
/// Weights are not transmitted, so every reconstructed node has weight
/// zero. Rejects leaf symbols outside the alphabet and trees deeper
/// than any well-formed tree can be.
pub fn read_tree<R: Read>(reader: &mut BitReader<R>) -> Result<HuffTree> {
    read_node(reader, 0)
}

fn read_node<R: Read>(reader: &mut BitReader<R>, depth: usize) -> Result<HuffTree> {
    if depth > MAX_TREE_DEPTH {
        return Err(HuffError::malformed_header(format!(
            "tree exceeds maximum depth {MAX_TREE_DEPTH}"
        )));
    }

    let is_leaf = reader.read_bit().map_err(HuffError::in_header)?;
    if is_leaf {
        let symbol = reader
            .read_bits(SYMBOL_BITS)
            .map_err(HuffError::in_header)?;
        if symbol as usize >= ALPHABET_SIZE {
            return Err(HuffError::malformed_header(format!(
                "leaf symbol {symbol} outside alphabet"
            )));
        }
        Ok(HuffTree::Leaf {
            symbol: symbol as u16,
            weight: 0,
        })
    } else {
        let left = read_node(reader, depth + 1)?;
        let right = read_node(reader, depth + 1)?;
        Ok(HuffTree::Internal {
            weight: 0,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
