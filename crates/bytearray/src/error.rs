//! Error types for bytearray.

use thiserror::Error;

/// Error type for [`ByteArray`](crate::ByteArray) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A read asked for more bytes than remain between position and length.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// A string does not fit in the 16-bit length prefix.
    #[error("string of {len} UTF-8 bytes exceeds the {max} byte length prefix limit")]
    StringTooLong { len: usize, max: usize },

    /// The end offset of a write is not representable.
    #[error("write of {width} bytes at position {position} overflows the address space")]
    PositionOverflow { position: usize, width: usize },

    /// Unrecognized endianness name.
    #[error("invalid endianness: {0}")]
    InvalidEndian(String),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl Error {
    /// Whether this is an end-of-buffer error.
    ///
    /// Streaming decoders use this to tell "need more input" apart from
    /// malformed data.
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::UnexpectedEof { .. })
    }
}

/// Result type alias using the bytearray Error type.
pub type Result<T> = std::result::Result<T, Error>;
