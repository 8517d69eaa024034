//! Byte order selection for multi-byte numeric codecs.
//!
//! [`Endian`] is a plain flag; the actual encoding is delegated to the
//! `byteorder` crate's [`BigEndian`] and [`LittleEndian`] implementations.

use std::fmt;
use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::Error;

/// Byte order used for 2, 4 and 8 byte numeric values and the UTF length prefix.
///
/// Single bytes and UTF-8 payload bytes are never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
    /// Most significant byte first. This is the default.
    #[default]
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// The byte order of the host.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    /// The opposite byte order.
    #[inline]
    pub const fn swapped(self) -> Self {
        match self {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }

    #[inline]
    pub(crate) fn read_u16(self, buf: &[u8]) -> u16 {
        match self {
            Endian::Big => BigEndian::read_u16(buf),
            Endian::Little => LittleEndian::read_u16(buf),
        }
    }

    #[inline]
    pub(crate) fn read_i16(self, buf: &[u8]) -> i16 {
        match self {
            Endian::Big => BigEndian::read_i16(buf),
            Endian::Little => LittleEndian::read_i16(buf),
        }
    }

    #[inline]
    pub(crate) fn read_u32(self, buf: &[u8]) -> u32 {
        match self {
            Endian::Big => BigEndian::read_u32(buf),
            Endian::Little => LittleEndian::read_u32(buf),
        }
    }

    #[inline]
    pub(crate) fn read_i32(self, buf: &[u8]) -> i32 {
        match self {
            Endian::Big => BigEndian::read_i32(buf),
            Endian::Little => LittleEndian::read_i32(buf),
        }
    }

    #[inline]
    pub(crate) fn read_f32(self, buf: &[u8]) -> f32 {
        match self {
            Endian::Big => BigEndian::read_f32(buf),
            Endian::Little => LittleEndian::read_f32(buf),
        }
    }

    #[inline]
    pub(crate) fn read_f64(self, buf: &[u8]) -> f64 {
        match self {
            Endian::Big => BigEndian::read_f64(buf),
            Endian::Little => LittleEndian::read_f64(buf),
        }
    }

    #[inline]
    pub(crate) fn write_u16(self, buf: &mut [u8], value: u16) {
        match self {
            Endian::Big => BigEndian::write_u16(buf, value),
            Endian::Little => LittleEndian::write_u16(buf, value),
        }
    }

    #[inline]
    pub(crate) fn write_i16(self, buf: &mut [u8], value: i16) {
        match self {
            Endian::Big => BigEndian::write_i16(buf, value),
            Endian::Little => LittleEndian::write_i16(buf, value),
        }
    }

    #[inline]
    pub(crate) fn write_u32(self, buf: &mut [u8], value: u32) {
        match self {
            Endian::Big => BigEndian::write_u32(buf, value),
            Endian::Little => LittleEndian::write_u32(buf, value),
        }
    }

    #[inline]
    pub(crate) fn write_i32(self, buf: &mut [u8], value: i32) {
        match self {
            Endian::Big => BigEndian::write_i32(buf, value),
            Endian::Little => LittleEndian::write_i32(buf, value),
        }
    }

    #[inline]
    pub(crate) fn write_f32(self, buf: &mut [u8], value: f32) {
        match self {
            Endian::Big => BigEndian::write_f32(buf, value),
            Endian::Little => LittleEndian::write_f32(buf, value),
        }
    }

    #[inline]
    pub(crate) fn write_f64(self, buf: &mut [u8], value: f64) {
        match self {
            Endian::Big => BigEndian::write_f64(buf, value),
            Endian::Little => LittleEndian::write_f64(buf, value),
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endian::Big => f.write_str("big"),
            Endian::Little => f.write_str("little"),
        }
    }
}

impl FromStr for Endian {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" | "big-endian" => Ok(Endian::Big),
            "little" | "le" | "little-endian" => Ok(Endian::Little),
            "native" => Ok(Endian::native()),
            _ => Err(Error::InvalidEndian(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Endian {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Endian {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
