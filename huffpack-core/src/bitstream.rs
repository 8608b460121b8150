//! Bit-level I/O operations for variable-length codes.
//!
//! This module provides `BitReader` and `BitWriter` for reading and
//! writing data at the bit level, which is what the Huffman codec is
//! built on: codes, the tree header and the magic field all have
//! widths that are not multiples of 8.
//!
//! # Bit Ordering
//!
//! huffpack packs bits MSB-first within each byte. The first bit
//! written lands in the most significant bit of the first byte, so a
//! 32-bit field written in one call reads back as four big-endian
//! bytes on disk.

use crate::error::{BitstreamError, Result};
use std::io::{self, Read, Write};

/// A bit-level reader that wraps any `Read` implementation.
///
/// `BitReader` keeps up to 64 bits buffered so reads can cross byte
/// boundaries cheaply. Exhaustion of the underlying source is reported
/// as [`BitstreamError::UnexpectedEof`], distinct from real I/O
/// failures.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer; the valid bits are the low `bits_in_buffer` bits,
    /// and the next bit to be consumed is the highest of those.
    buffer: u64,
    /// Number of valid bits in the buffer.
    bits_in_buffer: u8,
    /// Total bits consumed (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get the number of bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Consume this `BitReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Pull one byte from the underlying reader.
    fn next_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Err(BitstreamError::unexpected_eof(self.total_bits_read)),
                Ok(_) => return Ok(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Ensure at least `count` bits are buffered.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        debug_assert!(count <= 56, "cannot buffer more than 56 bits at once");
        while self.bits_in_buffer < count {
            let byte = self.next_byte()?;
            self.buffer = (self.buffer << 8) | byte as u64;
            self.bits_in_buffer += 8;
        }
        Ok(())
    }

    /// Read up to 32 bits from the stream.
    ///
    /// Returns the bits as a `u32` with the first bit read in the most
    /// significant position of the `count`-bit result.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= 32, "cannot read more than 32 bits at once");

        if count == 0 {
            return Ok(0);
        }

        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let mask = (1u64 << count) - 1;
        let result = ((self.buffer >> shift) & mask) as u32;

        self.bits_in_buffer -= count;
        self.total_bits_read += count as u64;

        Ok(result)
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }
}

/// A bit-level writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits and emits complete bytes to the
/// underlying writer. Call [`BitWriter::flush`] when done: it
/// zero-pads the final partial byte. The write path has no
/// end-of-input condition, so its methods return `io::Result`
/// directly.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer; the valid bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of valid bits in the buffer (always < 8 between calls).
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get the total number of bits written so far (padding excluded).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Emit all complete bytes from the buffer, most significant first.
    #[inline]
    fn drain_bytes(&mut self) -> io::Result<()> {
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.writer.write_all(&[byte])?;
            self.bits_in_buffer -= 8;
        }
        Ok(())
    }

    /// Write the low `count` bits of `value`, most significant first.
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) -> io::Result<()> {
        debug_assert!(count <= 32, "cannot write more than 32 bits at once");

        if count == 0 {
            return Ok(());
        }

        let mask = if count == 32 {
            u32::MAX
        } else {
            (1u32 << count) - 1
        };

        self.buffer = (self.buffer << count) | (value & mask) as u64;
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.drain_bytes()
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.write_bits(bit as u32, 1)
    }

    /// Flush any remaining bits to the underlying writer, zero-padding
    /// the final partial byte, then flush the writer itself.
    ///
    /// Must be called before the writer is dropped or the tail of the
    /// stream is lost.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.bits_in_buffer > 0 {
            let pad = 8 - self.bits_in_buffer;
            self.buffer <<= pad;
            self.bits_in_buffer = 8;
            self.drain_bytes()?;
        }
        self.writer.flush()
    }

    /// Consume this `BitWriter`, flushing, and return the underlying
    /// writer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}
