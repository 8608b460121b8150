//! # huffpack Huffman Codec
//!
//! Lossless compression with Huffman coding and an explicit
//! tree-in-header stream format.
//!
//! ## Stream Format
//!
//! A huffpack stream is a bit stream, packed MSB-first:
//!
//! - **Magic**: the 32-bit value `0xFACE8201`
//! - **Code tree**: preorder serialization; a 0 bit introduces an
//!   internal node (left subtree then right subtree follow), a 1 bit
//!   introduces a leaf followed by its symbol in 9 bits
//! - **Body**: the code of each input byte in order, then the code of
//!   the end-of-stream symbol (value 256), then zero padding to the
//!   next byte boundary
//!
//! The alphabet is the 256 byte values plus the synthetic end-of-stream
//! symbol, which is tallied exactly once so every stream carries its
//! own terminator. Nothing after the terminator is interpreted.
//!
//! ## Example
//!
//! ```rust
//! use huffpack_huffman::{compress_bytes, decompress_bytes};
//!
//! let original = b"abracadabra abracadabra";
//! let packed = compress_bytes(original).unwrap();
//! let unpacked = decompress_bytes(&packed).unwrap();
//! assert_eq!(unpacked, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod code;
pub mod decode;
pub mod encode;
pub mod error;
pub mod freq;
pub mod header;
pub mod tree;

pub use code::{Code, CodeBook};
pub use decode::{decompress, inspect, StreamInfo};
pub use encode::{compress, CompressSummary};
pub use error::{HuffError, Result};
pub use freq::FrequencyTable;
pub use tree::HuffTree;

/// Number of symbols in the coding alphabet: 256 byte values plus the
/// end-of-stream symbol.
pub const ALPHABET_SIZE: usize = 257;

/// The synthetic end-of-stream symbol, one past the largest byte value.
pub const EOF_SYMBOL: u16 = 256;

/// Magic number opening every huffpack stream.
pub const MAGIC: u32 = 0xFACE_8201;

/// Bits used to store one symbol in the serialized tree.
pub(crate) const SYMBOL_BITS: u8 = 9;

/// Compress a byte slice into a huffpack stream (convenience function).
///
/// # Example
///
/// ```rust
/// use huffpack_huffman::compress_bytes;
///
/// let packed = compress_bytes(b"ratio ratio ratio").unwrap();
/// assert_eq!(&packed[..2], &[0xFA, 0xCE]);
/// ```
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode::compress(data, &mut out)?;
    Ok(out)
}

/// Decompress a huffpack stream from a byte slice (convenience
/// function).
///
/// # Example
///
/// ```rust
/// use huffpack_huffman::{compress_bytes, decompress_bytes};
///
/// let packed = compress_bytes(b"hello").unwrap();
/// assert_eq!(decompress_bytes(&packed).unwrap(), b"hello");
/// ```
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decode::decompress(data, &mut out)?;
    Ok(out)
}
