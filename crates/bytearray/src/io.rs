//! `std::io` adapters for [`ByteArray`].
//!
//! These let a `ByteArray` sit behind code written against `Read`, `Write`
//! and `Seek`. The cursor is shared with the typed primitives.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::ByteArray;

impl Read for ByteArray {
    /// Copy up to `buf.len()` bytes from the position. Returns 0 at the end.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let count = buf.len().min(self.bytes_available());
        if count == 0 {
            return Ok(0);
        }
        self.read_bytes_into(&mut buf[..count])
            .map_err(io::Error::other)?;
        Ok(count)
    }
}

impl Write for ByteArray {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for ByteArray {
    /// Move the position. Seeking past the length is allowed; seeking before
    /// the start is an `InvalidInput` error.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(delta) => offset_by(self.len(), delta),
            SeekFrom::Current(delta) => offset_by(self.position(), delta),
        };

        let position = target
            .and_then(|t| usize::try_from(t).ok())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "invalid seek to a negative or overflowing position",
                )
            })?;

        self.set_position(position);
        Ok(position as u64)
    }
}

fn offset_by(base: usize, delta: i64) -> Option<u64> {
    (base as u64).checked_add_signed(delta)
}
