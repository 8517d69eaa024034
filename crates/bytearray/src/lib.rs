//! Growable, cursor-addressed byte buffer.
//!
//! This crate provides the binary serialization primitive used beneath
//! protocol and file format code:
//!
//! - [`ByteArray`] - A growable buffer with a cursor, logical length and
//!   capacity, reading and writing fixed-width numbers and UTF-8 strings
//! - [`Endian`] - Byte order for multi-byte values (big-endian by default)
//! - [`utf8`] - Stateless UTF-8 helpers for the string primitives
//!
//! `ByteArray` also implements `std::io::{Read, Write, Seek}`.
//!
//! # Example
//!
//! ```
//! use bytearray::{ByteArray, Endian};
//!
//! let mut buf = ByteArray::new();
//! buf.set_endian(Endian::Little);
//! buf.write_short(-2)?;
//! buf.write_utf("你好吗？")?;
//!
//! buf.set_position(0);
//! assert_eq!(buf.read_short()?, -2);
//! assert_eq!(buf.read_utf()?, "你好吗？");
//! # Ok::<(), bytearray::Error>(())
//! ```

mod buffer;
mod endian;
mod error;
mod io;

pub mod utf8;


pub use buffer::ByteArray;
pub use endian::Endian;
pub use error::{Error, Result};
