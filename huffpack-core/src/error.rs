//! Error types for bit-level I/O.

use std::io;
use thiserror::Error;

/// Errors a bit-level reader or writer can produce.
#[derive(Debug, Error)]
pub enum BitstreamError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The underlying source ran out of data mid-read.
    ///
    /// This is the distinguished end-of-input signal: callers decide
    /// whether running dry is expected (end of a byte scan) or a sign
    /// of a truncated stream.
    #[error("unexpected end of bitstream at bit {position}")]
    UnexpectedEof {
        /// Bit position at which the source was exhausted.
        position: u64,
    },
}

/// Result type alias for bit-level I/O operations.
pub type Result<T> = std::result::Result<T, BitstreamError>;

impl BitstreamError {
    /// Create an unexpected-EOF error at the given bit position.
    pub fn unexpected_eof(position: u64) -> Self {
        Self::UnexpectedEof { position }
    }

    /// True if this error is the end-of-input signal rather than a
    /// real I/O failure.
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::UnexpectedEof { .. })
    }
}
