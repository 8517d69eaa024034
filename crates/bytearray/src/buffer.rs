//! Growable, cursor-addressed byte buffer.
//!
//! This module provides [`ByteArray`], a buffer that tracks a read/write
//! position, a logical length and a physical capacity, and reads and writes
//! fixed-width numbers and UTF-8 strings in a configurable byte order.

use std::fmt;

use tracing::{debug, trace};

use crate::{utf8, Endian, Error, Result};

/// A growable byte buffer with a cursor.
///
/// Reads consume bytes between [`position`](Self::position) and
/// [`len`](Self::len) and fail with [`Error::UnexpectedEof`] when too few
/// remain. Writes grow the buffer as needed and raise the length to the
/// furthest byte written.
///
/// # Example
///
/// ```
/// use bytearray::ByteArray;
///
/// let mut buf = ByteArray::new();
/// buf.write_unsigned_int(0x87654321)?;
/// buf.write_utf("hello")?;
///
/// buf.set_position(0);
/// assert_eq!(buf.read_unsigned_byte()?, 0x87);
/// buf.set_position(4);
/// assert_eq!(buf.read_utf()?, "hello");
/// assert_eq!(buf.bytes_available(), 0);
/// # Ok::<(), bytearray::Error>(())
/// ```
#[derive(Clone)]
pub struct ByteArray {
    /// Physical storage; `backing.len()` is the capacity.
    backing: Vec<u8>,
    length: usize,
    position: usize,
    endian: Endian,
}

impl ByteArray {
    /// Create an empty buffer with no capacity, big-endian.
    #[inline]
    pub const fn new() -> Self {
        Self {
            backing: Vec::new(),
            length: 0,
            position: 0,
            endian: Endian::Big,
        }
    }

    /// Create an empty buffer with `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_region(vec![0; capacity])
    }

    /// Wrap a caller-supplied region as initial capacity.
    ///
    /// The region's bytes are not logical content: the buffer starts with
    /// length 0 and position 0. Use `From<Vec<u8>>` to adopt existing data.
    pub fn from_region(region: Vec<u8>) -> Self {
        Self {
            backing: region,
            length: 0,
            position: 0,
            endian: Endian::Big,
        }
    }

    /// Byte order of multi-byte values.
    #[inline]
    pub const fn endian(&self) -> Endian {
        self.endian
    }

    /// Set the byte order for subsequent multi-byte reads and writes.
    #[inline]
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Logical length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Check if the logical length is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Set the logical length.
    ///
    /// Growing allocates as needed and zero-fills the newly exposed bytes.
    /// If the position ends up past the new length it is clamped to it.
    pub fn set_len(&mut self, length: usize) {
        if length == self.length {
            return;
        }

        if length > self.length {
            self.ensure_capacity(length);
            self.backing[self.length..length].fill(0);
        } else {
            debug!(from = self.length, to = length, "truncating byte array");
        }

        self.length = length;

        if self.position > self.length {
            self.position = self.length;
        }
    }

    /// Current read/write offset.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor. Any value is accepted, including one past the length.
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Number of bytes that can be read from the current position.
    #[inline]
    pub const fn bytes_available(&self) -> usize {
        self.length.saturating_sub(self.position)
    }

    /// Physical capacity of the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.backing.len()
    }

    /// Reset length and position to zero and release the backing store.
    pub fn clear(&mut self) {
        debug!(length = self.length, capacity = self.backing.len(), "clearing byte array");
        self.backing = Vec::new();
        self.length = 0;
        self.position = 0;
    }

    /// The logical content, `0..len`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.backing[..self.length]
    }

    /// The unread part of the logical content, `position..len`.
    #[inline]
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.backing[self.position.min(self.length)..self.length]
    }

    /// Consume the buffer and return its logical content.
    pub fn into_vec(mut self) -> Vec<u8> {
        self.backing.truncate(self.length);
        self.backing
    }

    // ----- reads -----

    /// Read a boolean (non-zero = true).
    #[inline]
    pub fn read_boolean(&mut self) -> Result<bool> {
        self.read_unsigned_byte().map(|b| b != 0)
    }

    /// Read a signed byte.
    #[inline]
    pub fn read_byte(&mut self) -> Result<i8> {
        self.read_unsigned_byte().map(|b| b as i8)
    }

    /// Read an unsigned byte.
    #[inline]
    pub fn read_unsigned_byte(&mut self) -> Result<u8> {
        self.take(1).map(|b| b[0])
    }

    /// Read a signed 16-bit integer.
    #[inline]
    pub fn read_short(&mut self) -> Result<i16> {
        let endian = self.endian;
        self.take(2).map(|b| endian.read_i16(b))
    }

    /// Read an unsigned 16-bit integer.
    #[inline]
    pub fn read_unsigned_short(&mut self) -> Result<u16> {
        let endian = self.endian;
        self.take(2).map(|b| endian.read_u16(b))
    }

    /// Read a signed 32-bit integer.
    #[inline]
    pub fn read_int(&mut self) -> Result<i32> {
        let endian = self.endian;
        self.take(4).map(|b| endian.read_i32(b))
    }

    /// Read an unsigned 32-bit integer.
    #[inline]
    pub fn read_unsigned_int(&mut self) -> Result<u32> {
        let endian = self.endian;
        self.take(4).map(|b| endian.read_u32(b))
    }

    /// Read an IEEE 754 single-precision float.
    #[inline]
    pub fn read_float(&mut self) -> Result<f32> {
        let endian = self.endian;
        self.take(4).map(|b| endian.read_f32(b))
    }

    /// Read an IEEE 754 double-precision float.
    #[inline]
    pub fn read_double(&mut self) -> Result<f64> {
        let endian = self.endian;
        self.take(8).map(|b| endian.read_f64(b))
    }

    /// Read a UTF-8 string preceded by an unsigned 16-bit byte length.
    ///
    /// On any failure the position is left where it was before the prefix.
    pub fn read_utf(&mut self) -> Result<&str> {
        self.check_available(2)?;
        let start = self.position;
        let length = self.endian.read_u16(&self.backing[start..start + 2]) as usize;
        self.check_available(2 + length)?;

        let body = start + 2;
        let s = utf8::decode(&self.backing[body..body + length])?;
        self.position = body + length;
        Ok(s)
    }

    /// Read exactly `length` bytes as a UTF-8 string.
    pub fn read_utf_bytes(&mut self, length: usize) -> Result<&str> {
        self.check_available(length)?;
        if length == 0 {
            return Ok("");
        }
        let start = self.position;
        let s = utf8::decode(&self.backing[start..start + length])?;
        self.position = start + length;
        Ok(s)
    }

    /// Read `count` raw bytes.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&[u8]> {
        self.take(count)
    }

    /// Fill `dst` with raw bytes from the current position.
    pub fn read_bytes_into(&mut self, dst: &mut [u8]) -> Result<()> {
        let src = self.take(dst.len())?;
        dst.copy_from_slice(src);
        Ok(())
    }

    // ----- writes -----

    /// Write a boolean as a single byte, 1 or 0.
    #[inline]
    pub fn write_boolean(&mut self, value: bool) -> Result<()> {
        self.write_unsigned_byte(u8::from(value))
    }

    /// Write a signed byte.
    #[inline]
    pub fn write_byte(&mut self, value: i8) -> Result<()> {
        self.write_unsigned_byte(value as u8)
    }

    /// Write an unsigned byte.
    #[inline]
    pub fn write_unsigned_byte(&mut self, value: u8) -> Result<()> {
        self.reserve(1)?[0] = value;
        Ok(())
    }

    /// Write a signed 16-bit integer.
    #[inline]
    pub fn write_short(&mut self, value: i16) -> Result<()> {
        let endian = self.endian;
        endian.write_i16(self.reserve(2)?, value);
        Ok(())
    }

    /// Write an unsigned 16-bit integer.
    #[inline]
    pub fn write_unsigned_short(&mut self, value: u16) -> Result<()> {
        let endian = self.endian;
        endian.write_u16(self.reserve(2)?, value);
        Ok(())
    }

    /// Write a signed 32-bit integer.
    #[inline]
    pub fn write_int(&mut self, value: i32) -> Result<()> {
        let endian = self.endian;
        endian.write_i32(self.reserve(4)?, value);
        Ok(())
    }

    /// Write an unsigned 32-bit integer.
    #[inline]
    pub fn write_unsigned_int(&mut self, value: u32) -> Result<()> {
        let endian = self.endian;
        endian.write_u32(self.reserve(4)?, value);
        Ok(())
    }

    /// Write an IEEE 754 single-precision float.
    #[inline]
    pub fn write_float(&mut self, value: f32) -> Result<()> {
        let endian = self.endian;
        endian.write_f32(self.reserve(4)?, value);
        Ok(())
    }

    /// Write an IEEE 754 double-precision float.
    #[inline]
    pub fn write_double(&mut self, value: f64) -> Result<()> {
        let endian = self.endian;
        endian.write_f64(self.reserve(8)?, value);
        Ok(())
    }

    /// Write a UTF-8 string preceded by its byte length as an unsigned 16-bit
    /// integer.
    ///
    /// Strings longer than [`utf8::MAX_PREFIXED_LEN`] bytes are rejected
    /// before anything is written.
    pub fn write_utf(&mut self, value: &str) -> Result<()> {
        let length = utf8::prefix_len(value)?;
        let endian = self.endian;

        let dst = self.reserve(2 + value.len())?;
        endian.write_u16(&mut dst[..2], length);
        dst[2..].copy_from_slice(value.as_bytes());
        Ok(())
    }

    /// Write the UTF-8 bytes of a string without a length prefix.
    #[inline]
    pub fn write_utf_bytes(&mut self, value: &str) -> Result<()> {
        self.write_bytes(value.as_bytes())
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, src: &[u8]) -> Result<()> {
        self.reserve(src.len())?.copy_from_slice(src);
        Ok(())
    }

    // ----- internals -----

    fn check_available(&self, needed: usize) -> Result<()> {
        let available = self.bytes_available();
        if available < needed {
            return Err(Error::UnexpectedEof { needed, available });
        }
        Ok(())
    }

    /// Borrow `width` readable bytes at the position and advance past them.
    ///
    /// The position may lie past the backing store, so empty reads never
    /// index it.
    fn take(&mut self, width: usize) -> Result<&[u8]> {
        self.check_available(width)?;
        if width == 0 {
            return Ok(&[]);
        }
        let start = self.position;
        self.position = start + width;
        Ok(&self.backing[start..start + width])
    }

    /// Make room for `width` bytes at the position, advance past them and
    /// return the slot to be filled.
    ///
    /// A gap between the old length and the position is zero-filled.
    fn reserve(&mut self, width: usize) -> Result<&mut [u8]> {
        let start = self.position;
        let end = start
            .checked_add(width)
            .ok_or(Error::PositionOverflow { position: start, width })?;

        self.ensure_capacity(end);

        if start > self.length {
            self.backing[self.length..start].fill(0);
        }

        self.position = end;
        self.length = self.length.max(end);
        Ok(&mut self.backing[start..end])
    }

    /// Grow the backing store to hold at least `required` bytes.
    ///
    /// An empty store is sized exactly; otherwise capacity doubles until it
    /// fits. Only the logical bytes are carried over.
    fn ensure_capacity(&mut self, required: usize) {
        let capacity = self.backing.len();
        if required <= capacity {
            return;
        }

        let mut new_capacity = if capacity == 0 { required } else { capacity };
        while new_capacity < required {
            new_capacity = new_capacity.saturating_mul(2);
        }

        trace!(
            from = capacity,
            to = new_capacity,
            required,
            length = self.length,
            "growing byte array"
        );

        let mut grown = vec![0u8; new_capacity];
        grown[..self.length].copy_from_slice(&self.backing[..self.length]);
        self.backing = grown;
    }
}

impl Default for ByteArray {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ByteArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteArray")
            .field("length", &self.length)
            .field("position", &self.position)
            .field("capacity", &self.backing.len())
            .field("endian", &self.endian)
            .finish()
    }
}

/// Adopt existing bytes as content: length is `data.len()`, position 0.
impl From<Vec<u8>> for ByteArray {
    fn from(data: Vec<u8>) -> Self {
        let length = data.len();
        Self {
            backing: data,
            length,
            position: 0,
            endian: Endian::Big,
        }
    }
}

impl From<&[u8]> for ByteArray {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_is_empty() {
        let ba = ByteArray::new();
        assert_eq!(ba.position(), 0);
        assert_eq!(ba.len(), 0);
        assert_eq!(ba.capacity(), 0);
        assert_eq!(ba.bytes_available(), 0);
        assert_eq!(ba.endian(), Endian::Big);
    }

    #[test]
    fn test_from_region_is_capacity_only() {
        let ba = ByteArray::from_region(vec![0xAA; 16]);
        assert_eq!(ba.len(), 0);
        assert_eq!(ba.position(), 0);
        assert_eq!(ba.capacity(), 16);
        assert!(ba.as_bytes().is_empty());
    }

    #[test]
    fn test_length_and_position() {
        let mut ba = ByteArray::new();

        ba.set_len(2);
        assert_eq!(ba.position(), 0);
        assert_eq!(ba.len(), 2);
        assert_eq!(ba.bytes_available(), 2);

        ba.set_position(4);
        assert_eq!(ba.position(), 4);
        assert_eq!(ba.len(), 2);
        assert_eq!(ba.bytes_available(), 0);

        ba.set_len(9);
        assert_eq!(ba.position(), 4);
        assert_eq!(ba.len(), 9);
        assert_eq!(ba.bytes_available(), 5);
    }

    #[test]
    fn test_truncate_clamps_position() {
        let mut ba = ByteArray::new();
        ba.write_unsigned_int(1).unwrap();
        assert_eq!(ba.position(), 4);

        ba.set_len(2);
        assert_eq!(ba.len(), 2);
        assert_eq!(ba.position(), 2);

        ba.set_position(1);
        ba.set_len(1);
        assert_eq!(ba.position(), 1);
    }

    #[test]
    fn test_grow_length_clamps_far_position() {
        let mut ba = ByteArray::new();
        ba.set_position(10);
        ba.set_len(3);
        assert_eq!(ba.position(), 3);
    }

    #[test]
    fn test_grown_length_reads_zero() {
        let mut ba = ByteArray::new();
        ba.write_unsigned_int(0xFFFFFFFF).unwrap();
        ba.set_len(0);
        ba.set_len(4);
        ba.set_position(0);
        assert_eq!(ba.read_unsigned_int().unwrap(), 0);
    }

    #[test]
    fn test_write_and_read_bool() {
        let mut ba = ByteArray::new();

        ba.set_len(1);
        assert_eq!(ba.len(), 1);
        assert!(!ba.read_boolean().unwrap());

        ba.set_position(3);

        ba.write_boolean(true).unwrap();
        ba.write_boolean(false).unwrap();
        ba.write_byte(0).unwrap();
        ba.write_byte(1).unwrap();
        ba.set_position(0);

        assert!(!ba.read_boolean().unwrap());
        assert!(!ba.read_boolean().unwrap());
        assert!(!ba.read_boolean().unwrap());
        assert!(ba.read_boolean().unwrap());
        assert!(!ba.read_boolean().unwrap());
        assert!(!ba.read_boolean().unwrap());
        assert!(ba.read_boolean().unwrap());

        assert!(ba.read_boolean().unwrap_err().is_eof());
    }

    #[test]
    fn test_nonzero_byte_is_true() {
        let mut ba = ByteArray::from(vec![0x00, 0x02, 0xFF]);
        assert!(!ba.read_boolean().unwrap());
        assert!(ba.read_boolean().unwrap());
        assert!(ba.read_boolean().unwrap());
    }

    #[test]
    fn test_signed_integers() {
        let mut ba = ByteArray::new();
        ba.write_byte(-1).unwrap();
        ba.write_short(-1).unwrap();
        ba.write_int(-1).unwrap();
        ba.set_position(0);

        assert_eq!(ba.read_byte().unwrap(), -1);
        assert_eq!(ba.read_short().unwrap(), -1);
        assert_eq!(ba.read_int().unwrap(), -1);
        assert_eq!(ba.as_bytes(), &[0xFF; 7]);
    }

    #[test]
    fn test_unsigned_integers() {
        let mut ba = ByteArray::new();
        ba.write_unsigned_byte(1).unwrap();
        ba.write_unsigned_short(1).unwrap();
        ba.write_unsigned_int(1).unwrap();
        ba.set_position(0);

        assert_eq!(ba.read_unsigned_byte().unwrap(), 1);
        assert_eq!(ba.read_unsigned_short().unwrap(), 1);
        assert_eq!(ba.read_unsigned_int().unwrap(), 1);
    }

    #[test]
    fn test_signedness_shares_width() {
        let mut ba = ByteArray::new();
        ba.write_short(-2).unwrap();
        ba.write_int(i32::MIN).unwrap();
        ba.set_position(0);

        assert_eq!(ba.read_unsigned_short().unwrap(), 0xFFFE);
        assert_eq!(ba.read_unsigned_int().unwrap(), 0x8000_0000);
    }

    #[test]
    fn test_floats() {
        let mut ba = ByteArray::new();
        ba.write_double(1.25).unwrap();
        ba.write_double(9.8).unwrap();
        ba.write_float(1.5).unwrap();
        ba.set_position(0);

        assert_eq!(ba.read_double().unwrap(), 1.25);
        assert_eq!(ba.read_double().unwrap(), 9.8);
        assert_eq!(ba.read_float().unwrap(), 1.5);
        assert_eq!(ba.position(), 20);
    }

    #[test]
    fn test_uint_big_endian_bytes() {
        let mut ba = ByteArray::with_capacity(16);
        ba.write_unsigned_int(0x87654321).unwrap();
        ba.set_position(0);

        assert_eq!(ba.read_unsigned_byte().unwrap(), 0x87);
        assert_eq!(ba.read_unsigned_byte().unwrap(), 0x65);
        assert_eq!(ba.read_unsigned_byte().unwrap(), 0x43);
        assert_eq!(ba.read_unsigned_byte().unwrap(), 0x21);
    }

    #[test]
    fn test_utf_round_trip() {
        let mut ba = ByteArray::new();
        ba.write_utf("你好吗？").unwrap();
        assert_eq!(ba.len(), 2 + 12);
        ba.set_position(0);

        assert_eq!(ba.read_utf().unwrap(), "你好吗？");
        assert_eq!(ba.position(), 2 + 12);
    }

    #[test]
    fn test_utf_prefix_follows_endian() {
        let mut ba = ByteArray::new();
        ba.set_endian(Endian::Little);
        ba.write_utf("abc").unwrap();
        assert_eq!(ba.as_bytes(), &[3, 0, b'a', b'b', b'c']);

        ba.set_endian(Endian::Big);
        ba.set_position(0);
        ba.write_utf("abc").unwrap();
        assert_eq!(ba.as_bytes(), &[0, 3, b'a', b'b', b'c']);
    }

    #[test]
    fn test_utf_bytes_no_prefix() {
        let mut ba = ByteArray::new();
        ba.write_utf_bytes("héllo").unwrap();
        assert_eq!(ba.len(), 6);
        ba.set_position(0);
        assert_eq!(ba.read_utf_bytes(6).unwrap(), "héllo");
        assert_eq!(ba.bytes_available(), 0);
    }

    #[test]
    fn test_write_utf_too_long() {
        let mut ba = ByteArray::new();
        let long = "x".repeat(utf8::MAX_PREFIXED_LEN + 1);

        let err = ba.write_utf(&long).unwrap_err();
        assert!(matches!(err, Error::StringTooLong { .. }));
        assert_eq!(ba.len(), 0);
        assert_eq!(ba.position(), 0);

        ba.write_utf(&long[..utf8::MAX_PREFIXED_LEN]).unwrap();
        assert_eq!(ba.len(), 2 + utf8::MAX_PREFIXED_LEN);
    }

    #[test]
    fn test_malformed_utf_does_not_advance() {
        let mut ba = ByteArray::from(vec![0x00, 0x02, 0xC3, 0x28]);

        assert!(matches!(ba.read_utf(), Err(Error::Utf8(_))));
        assert_eq!(ba.position(), 0);

        ba.set_position(2);
        assert!(matches!(ba.read_utf_bytes(2), Err(Error::Utf8(_))));
        assert_eq!(ba.position(), 2);
    }

    #[test]
    fn test_short_utf_payload_does_not_advance() {
        let mut ba = ByteArray::new();
        ba.write_unsigned_short(10).unwrap();
        ba.write_utf_bytes("abc").unwrap();
        ba.set_position(0);

        match ba.read_utf() {
            Err(Error::UnexpectedEof { needed, available }) => {
                assert_eq!(needed, 12);
                assert_eq!(available, 5);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(ba.position(), 0);
        assert_eq!(ba.len(), 5);
    }

    #[rstest]
    #[case::byte(1)]
    #[case::short(2)]
    #[case::int(4)]
    #[case::double(8)]
    fn test_eof_leaves_state(#[case] width: usize) {
        let mut ba = ByteArray::new();
        ba.write_bytes(&vec![0u8; width - 1]).unwrap();
        ba.set_position(0);

        let result = match width {
            1 => ba.read_unsigned_byte().map(|_| ()),
            2 => ba.read_short().map(|_| ()),
            4 => ba.read_float().map(|_| ()),
            _ => ba.read_double().map(|_| ()),
        };

        match result {
            Err(Error::UnexpectedEof { needed, available }) => {
                assert_eq!(needed, width);
                assert_eq!(available, width - 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(ba.position(), 0);
        assert_eq!(ba.len(), width - 1);
    }

    #[test]
    fn test_read_past_length_after_seek() {
        let mut ba = ByteArray::from(vec![1, 2, 3, 4]);
        ba.set_position(8);
        assert_eq!(ba.bytes_available(), 0);
        assert!(ba.read_unsigned_byte().unwrap_err().is_eof());
        assert_eq!(ba.position(), 8);
    }

    #[rstest]
    #[case(Endian::Big, [0x12, 0x34, 0x56, 0x78])]
    #[case(Endian::Little, [0x78, 0x56, 0x34, 0x12])]
    fn test_endian_layout(#[case] endian: Endian, #[case] expected: [u8; 4]) {
        let mut ba = ByteArray::new();
        ba.set_endian(endian);
        ba.write_unsigned_int(0x12345678).unwrap();
        assert_eq!(ba.as_bytes(), &expected);

        ba.set_position(0);
        assert_eq!(ba.read_unsigned_int().unwrap(), 0x12345678);
    }

    #[rstest]
    #[case(Endian::Big)]
    #[case(Endian::Little)]
    fn test_switched_endian_reverses(#[case] endian: Endian) {
        let mut ba = ByteArray::new();
        ba.set_endian(endian);
        ba.write_unsigned_short(0xABCD).unwrap();
        ba.write_int(0x0102_0304).unwrap();
        ba.write_double(2.5).unwrap();

        ba.set_endian(endian.swapped());
        ba.set_position(0);
        assert_eq!(ba.read_unsigned_short().unwrap(), 0xCDAB);
        assert_eq!(ba.read_int().unwrap(), 0x0403_0201);
        assert_eq!(ba.read_double().unwrap(), f64::from_bits(2.5f64.to_bits().swap_bytes()));
    }

    #[test]
    fn test_endian_change_keeps_written_bytes() {
        let mut ba = ByteArray::new();
        ba.write_unsigned_short(0x0102).unwrap();
        ba.set_endian(Endian::Little);
        ba.write_unsigned_short(0x0102).unwrap();
        assert_eq!(ba.as_bytes(), &[0x01, 0x02, 0x02, 0x01]);
    }

    #[test]
    fn test_growth_preserves_content() {
        let mut ba = ByteArray::new();
        let mut expected = Vec::new();

        for (i, size) in [1usize, 2, 4, 8, 16, 32, 64].into_iter().enumerate() {
            let chunk: Vec<u8> = (0..size).map(|j| (i * 31 + j) as u8).collect();
            ba.write_bytes(&chunk).unwrap();
            expected.extend_from_slice(&chunk);
            assert!(ba.capacity() >= ba.len());
        }

        assert_eq!(ba.len(), 127);
        assert_eq!(ba.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_growth_doubles() {
        let mut ba = ByteArray::new();
        ba.write_unsigned_byte(1).unwrap();
        assert_eq!(ba.capacity(), 1);
        ba.write_unsigned_short(2).unwrap();
        assert_eq!(ba.capacity(), 4);
        ba.write_double(3.0).unwrap();
        assert_eq!(ba.capacity(), 16);

        let mut sized = ByteArray::with_capacity(3);
        sized.write_bytes(&[0; 13]).unwrap();
        assert_eq!(sized.capacity(), 24);
    }

    #[test]
    fn test_write_past_length_allocates_gap() {
        let mut ba = ByteArray::new();
        ba.write_unsigned_byte(7).unwrap();
        ba.set_position(10);
        ba.write_unsigned_int(0xDEADBEEF).unwrap();

        assert_eq!(ba.len(), 14);
        assert_eq!(ba.position(), 14);
        assert!(ba.capacity() >= 14);

        ba.set_position(0);
        assert_eq!(ba.read_unsigned_byte().unwrap(), 7);
        ba.set_position(10);
        assert_eq!(ba.read_unsigned_int().unwrap(), 0xDEADBEEF);
    }

    #[test]
    fn test_overwrite_does_not_grow_length() {
        let mut ba = ByteArray::new();
        ba.write_unsigned_int(0).unwrap();
        ba.write_unsigned_int(0).unwrap();
        ba.set_position(2);
        ba.write_unsigned_short(0xFFFF).unwrap();

        assert_eq!(ba.len(), 8);
        assert_eq!(ba.position(), 4);
        assert_eq!(ba.as_bytes(), &[0, 0, 0xFF, 0xFF, 0, 0, 0, 0]);
    }

    #[test]
    fn test_reads_do_not_change_length() {
        let mut ba = ByteArray::from(&[1u8, 2, 3, 4][..]);
        ba.read_unsigned_short().unwrap();
        assert_eq!(ba.len(), 4);
        assert_eq!(ba.remaining_bytes(), &[3, 4]);
    }

    #[test]
    fn test_clear() {
        let mut ba = ByteArray::new();
        ba.write_utf("some text").unwrap();
        ba.write_double(1.0).unwrap();

        ba.clear();
        assert_eq!(ba.len(), 0);
        assert_eq!(ba.position(), 0);
        assert_eq!(ba.bytes_available(), 0);

        ba.write_unsigned_byte(0x42).unwrap();
        assert_eq!(ba.as_bytes(), &[0x42]);
    }

    #[test]
    fn test_position_overflow() {
        let mut ba = ByteArray::new();
        ba.set_position(usize::MAX - 1);

        let err = ba.write_unsigned_int(1).unwrap_err();
        assert!(matches!(err, Error::PositionOverflow { width: 4, .. }));
        assert_eq!(ba.len(), 0);
        assert_eq!(ba.position(), usize::MAX - 1);
    }

    #[test]
    fn test_raw_bytes() {
        let mut ba = ByteArray::new();
        ba.write_bytes(b"abcdef").unwrap();
        ba.set_position(1);

        assert_eq!(ba.read_bytes(2).unwrap(), b"bc");

        let mut dst = [0u8; 3];
        ba.read_bytes_into(&mut dst).unwrap();
        assert_eq!(&dst, b"def");

        assert!(ba.read_bytes_into(&mut dst).unwrap_err().is_eof());
        assert_eq!(ba.into_vec(), b"abcdef".to_vec());
    }

    #[test]
    fn test_from_vec_is_content() {
        let mut ba = ByteArray::from(vec![0x00, 0x01]);
        assert_eq!(ba.len(), 2);
        assert_eq!(ba.position(), 0);
        assert_eq!(ba.read_unsigned_short().unwrap(), 1);
    }

    #[test]
    fn test_empty_reads_past_capacity() {
        let mut ba = ByteArray::new();
        ba.set_position(10);

        assert_eq!(ba.read_utf_bytes(0).unwrap(), "");
        assert!(ba.read_bytes(0).unwrap().is_empty());
        ba.read_bytes_into(&mut []).unwrap();
        assert_eq!(ba.position(), 10);
        assert_eq!(ba.len(), 0);

        assert!(ba.read_utf_bytes(1).unwrap_err().is_eof());
        assert!(ba.read_utf().unwrap_err().is_eof());
    }

    #[test]
    fn test_empty_reads_at_end_of_content() {
        let mut ba = ByteArray::from(vec![1, 2, 3]);
        ba.set_position(3);
        assert_eq!(ba.read_utf_bytes(0).unwrap(), "");
        assert!(ba.read_bytes(0).unwrap().is_empty());
        assert_eq!(ba.position(), 3);
    }
}
