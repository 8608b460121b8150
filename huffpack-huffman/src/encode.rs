//! Compression: tally, build, and emit a huffpack stream.

use crate::code::CodeBook;
use crate::error::Result;
use crate::freq::FrequencyTable;
use crate::header;
use crate::tree::HuffTree;
use crate::EOF_SYMBOL;
use huffpack_core::BitWriter;
use std::io::{Read, Write};

/// Byte counts for one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressSummary {
    /// Bytes consumed from the input.
    pub input_bytes: u64,
    /// Bytes emitted, header and padding included.
    pub output_bytes: u64,
}

impl CompressSummary {
    /// Compressed size as a fraction of the input size.
    ///
    /// Greater than 1.0 when the stream grew (the header always costs
    /// something). Zero-length input reports a ratio of 0.0.
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

/// Compress `input` into a huffpack stream written to `output`.
///
/// The encoder makes two passes over the data, one to tally symbol
/// frequencies and one to emit codes, so the input is buffered in
/// memory first. The stream is magic number, code tree, coded body,
/// and the end-of-stream code, with the final byte zero-padded.
pub fn compress<R: Read, W: Write>(mut input: R, output: W) -> Result<CompressSummary> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let freq = FrequencyTable::from_bytes(&data);
    let tree = HuffTree::from_frequencies(&freq);
    let book = CodeBook::from_tree(&tree);

    let mut writer = BitWriter::new(output);
    header::write_magic(&mut writer)?;
    header::write_tree(&tree, &mut writer)?;

    for &byte in &data {
        book.get(u16::from(byte)).write_to(&mut writer)?;
    }
    book.get(EOF_SYMBOL).write_to(&mut writer)?;
    writer.flush()?;

    Ok(CompressSummary {
        input_bytes: data.len() as u64,
        output_bytes: writer.bits_written().div_ceil(8),
    })
}
