//! Stateless UTF-8 helpers used by the string primitives.
//!
//! Rust strings are already UTF-8, so encoding is a borrow of the string's
//! bytes. Decoding is strict: malformed input is an error, never a
//! replacement character.

use crate::{Error, Result};

/// Largest payload a 16-bit length prefix can describe.
pub const MAX_PREFIXED_LEN: usize = u16::MAX as usize;

/// Decode a byte slice as UTF-8.
#[inline]
pub fn decode(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(Error::Utf8)
}

/// Encoded length of `s` as a 16-bit length prefix.
///
/// Fails with [`Error::StringTooLong`] when the encoding exceeds
/// [`MAX_PREFIXED_LEN`] bytes.
pub fn prefix_len(s: &str) -> Result<u16> {
    u16::try_from(s.len()).map_err(|_| Error::StringTooLong {
        len: s.len(),
        max: MAX_PREFIXED_LEN,
    })
}
