//! Error types for the Huffman codec.

use huffpack_core::BitstreamError;
use std::io;
use thiserror::Error;

/// Errors the Huffman codec can produce.
#[derive(Debug, Error)]
pub enum HuffError {
    /// The stream does not start with the huffpack magic number.
    #[error("bad magic number: expected {expected:#010x}, found {found:#010x}")]
    BadMagic {
        /// The magic number a huffpack stream must start with.
        expected: u32,
        /// The 32-bit value actually found.
        found: u32,
    },

    /// The header could not be decoded into a valid code tree.
    #[error("malformed header: {message}")]
    MalformedHeader {
        /// What went wrong while decoding the header.
        message: String,
    },

    /// The coded body ended before the end-of-stream marker.
    #[error("truncated stream: input exhausted at bit {position}")]
    TruncatedStream {
        /// Bit position at which the input ran dry.
        position: u64,
    },

    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for Huffman codec operations.
pub type Result<T> = std::result::Result<T, HuffError>;

impl HuffError {
    /// Create a malformed-header error with the given message.
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    /// Map a bit-level read failure that occurred inside the header.
    ///
    /// Running out of input mid-header means the header itself is
    /// damaged, so EOF becomes [`HuffError::MalformedHeader`].
    pub(crate) fn in_header(err: BitstreamError) -> Self {
        match err {
            BitstreamError::Io(e) => Self::Io(e),
            BitstreamError::UnexpectedEof { position } => Self::MalformedHeader {
                message: format!("input ended inside header at bit {position}"),
            },
        }
    }

    /// Map a bit-level read failure that occurred inside the coded body.
    ///
    /// The body is terminated by an in-band marker, so running out of
    /// input first means the stream was cut short:
    /// [`HuffError::TruncatedStream`].
    pub(crate) fn in_body(err: BitstreamError) -> Self {
        match err {
            BitstreamError::Io(e) => Self::Io(e),
            BitstreamError::UnexpectedEof { position } => Self::TruncatedStream { position },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_magic_display() {
        let err = HuffError::BadMagic {
            expected: 0xFACE_8201,
            found: 0x1F8B_0808,
        };
        let msg = err.to_string();
        assert!(msg.contains("0xface8201"));
        assert!(msg.contains("0x1f8b0808"));
    }

    #[test]
    fn test_header_eof_becomes_malformed() {
        let err = HuffError::in_header(BitstreamError::unexpected_eof(17));
        assert!(matches!(err, HuffError::MalformedHeader { .. }));
        assert!(err.to_string().contains("bit 17"));
    }

    #[test]
    fn test_body_eof_becomes_truncated() {
        let err = HuffError::in_body(BitstreamError::unexpected_eof(99));
        assert!(matches!(
            err,
            HuffError::TruncatedStream { position: 99 }
        ));
    }

    #[test]
    fn test_io_passthrough() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = HuffError::in_body(BitstreamError::from(io_err));
        assert!(matches!(err, HuffError::Io(_)));
    }
}
