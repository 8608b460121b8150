//! # huffpack Core
//!
//! Core components for the huffpack compression library.
//!
//! This crate provides the bit-level building blocks the codec is
//! written against:
//!
//! - [`bitstream`]: `BitReader`/`BitWriter` for variable-length codes
//! - [`error`]: Error types
//!
//! ## Bit Ordering
//!
//! The huffpack format packs bits MSB-first: the first bit written
//! becomes the most significant bit of the first output byte. Codes
//! therefore appear on the wire in root-to-leaf order, and the 32-bit
//! magic round-trips as four big-endian bytes.
//!
//! ## Example
//!
//! ```rust
//! use huffpack_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0b1100, 4).unwrap();
//!     writer.flush().unwrap();
//! }
//!
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter};
pub use error::{BitstreamError, Result};
