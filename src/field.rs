//! Typed field tokens accepted on the command line.
//!
//! Encoding takes `TYPE:LITERAL` tokens ([`Value`]); decoding takes `TYPE`
//! tokens ([`Kind`]), with `utfbytes:N` naming an explicit byte count.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use bytearray::ByteArray;

/// A field type to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
    F64,
    /// 16-bit length prefixed string.
    Utf,
    /// Unprefixed string of the given byte length.
    UtfBytes(usize),
}

impl Kind {
    /// Read one value of this kind at the buffer's position.
    pub fn read_from(self, buf: &mut ByteArray) -> bytearray::Result<Value> {
        Ok(match self {
            Kind::Bool => Value::Bool(buf.read_boolean()?),
            Kind::I8 => Value::I8(buf.read_byte()?),
            Kind::U8 => Value::U8(buf.read_unsigned_byte()?),
            Kind::I16 => Value::I16(buf.read_short()?),
            Kind::U16 => Value::U16(buf.read_unsigned_short()?),
            Kind::I32 => Value::I32(buf.read_int()?),
            Kind::U32 => Value::U32(buf.read_unsigned_int()?),
            Kind::F32 => Value::F32(buf.read_float()?),
            Kind::F64 => Value::F64(buf.read_double()?),
            Kind::Utf => Value::Utf(buf.read_utf()?.to_owned()),
            Kind::UtfBytes(len) => Value::UtfBytes(buf.read_utf_bytes(len)?.to_owned()),
        })
    }

    fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::U8 => "u8",
            Kind::I16 => "i16",
            Kind::U16 => "u16",
            Kind::I32 => "i32",
            Kind::U32 => "u32",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Utf => "utf",
            Kind::UtfBytes(_) => "utfbytes",
        }
    }
}

impl FromStr for Kind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let kind = match name.to_ascii_lowercase().as_str() {
            "bool" => Kind::Bool,
            "i8" => Kind::I8,
            "u8" => Kind::U8,
            "i16" => Kind::I16,
            "u16" => Kind::U16,
            "i32" => Kind::I32,
            "u32" => Kind::U32,
            "f32" => Kind::F32,
            "f64" => Kind::F64,
            "utf" => Kind::Utf,
            "utfbytes" => {
                let len = arg.ok_or_else(|| anyhow!("utfbytes needs a byte count, e.g. utfbytes:5"))?;
                let len = parse_int(len).with_context(|| format!("invalid byte count in {s:?}"))?;
                return Ok(Kind::UtfBytes(usize::try_from(len)?));
            }
            other => bail!("unknown field type {other:?}"),
        };

        if arg.is_some() {
            bail!("field type {name:?} takes no argument");
        }
        Ok(kind)
    }
}

/// A typed value to encode, or one that was decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    F32(f32),
    F64(f64),
    Utf(String),
    UtfBytes(String),
}

impl Value {
    /// Write this value at the buffer's position.
    pub fn write_to(&self, buf: &mut ByteArray) -> bytearray::Result<()> {
        match self {
            Value::Bool(v) => buf.write_boolean(*v),
            Value::I8(v) => buf.write_byte(*v),
            Value::U8(v) => buf.write_unsigned_byte(*v),
            Value::I16(v) => buf.write_short(*v),
            Value::U16(v) => buf.write_unsigned_short(*v),
            Value::I32(v) => buf.write_int(*v),
            Value::U32(v) => buf.write_unsigned_int(*v),
            Value::F32(v) => buf.write_float(*v),
            Value::F64(v) => buf.write_double(*v),
            Value::Utf(s) => buf.write_utf(s),
            Value::UtfBytes(s) => buf.write_utf_bytes(s),
        }
    }

    /// The kind that decodes this value back.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::I8(_) => Kind::I8,
            Value::U8(_) => Kind::U8,
            Value::I16(_) => Kind::I16,
            Value::U16(_) => Kind::U16,
            Value::I32(_) => Kind::I32,
            Value::U32(_) => Kind::U32,
            Value::F32(_) => Kind::F32,
            Value::F64(_) => Kind::F64,
            Value::Utf(_) => Kind::Utf,
            Value::UtfBytes(s) => Kind::UtfBytes(s.len()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind().name())?;
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Utf(s) | Value::UtfBytes(s) => write!(f, "{s:?}"),
        }
    }
}

impl FromStr for Value {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, literal) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("expected TYPE:VALUE, got {s:?}"))?;

        let value = match name.to_ascii_lowercase().as_str() {
            "bool" => Value::Bool(parse_bool(literal)?),
            "i8" => Value::I8(parse_int(literal)?.try_into()?),
            "u8" => Value::U8(parse_int(literal)?.try_into()?),
            "i16" => Value::I16(parse_int(literal)?.try_into()?),
            "u16" => Value::U16(parse_int(literal)?.try_into()?),
            "i32" => Value::I32(parse_int(literal)?.try_into()?),
            "u32" => Value::U32(parse_int(literal)?.try_into()?),
            "f32" => Value::F32(literal.parse()?),
            "f64" => Value::F64(literal.parse()?),
            "utf" => Value::Utf(literal.to_string()),
            "utfbytes" => Value::UtfBytes(literal.to_string()),
            other => bail!("unknown field type {other:?}"),
        };
        Ok(value)
    }
}

fn parse_bool(literal: &str) -> anyhow::Result<bool> {
    match literal.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => bail!("invalid boolean {literal:?}"),
    }
}

/// Parse a decimal or `0x` hexadecimal integer with an optional leading `-`.
fn parse_int(literal: &str) -> anyhow::Result<i64> {
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal),
    };

    let (radix, body) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => (16, hex),
        None => (10, digits),
    };

    // from_str_radix accepts its own sign, which would allow "--5" or "0x-5".
    if body.starts_with(|c: char| c == '-' || c == '+') {
        bail!("invalid integer {literal:?}");
    }

    let magnitude = i64::from_str_radix(body, radix)
        .with_context(|| format!("invalid integer {literal:?}"))?;

    if !negative {
        return Ok(magnitude);
    }
    magnitude
        .checked_neg()
        .with_context(|| format!("integer {literal:?} out of range"))
}
