//! Decoded argument values.

use crate::{primitives::Primitive, tag::Tag};
use core::fmt;

/// A decoded value, borrowing string contents from the action.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value<'a> {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    /// A string argument holding valid UTF-8.
    Str(&'a str),
    /// A string argument whose bytes are not valid UTF-8.
    Bytes(&'a [u8]),
    /// An argument that could not be decoded.
    Unknown,
}

impl<'a> Value<'a> {
    /// Decodes the payload of an argument tagged `tag`.
    ///
    /// `payload` must hold exactly the payload bytes (the content for strings).
    pub(crate) fn decode(tag: Tag, payload: &'a [u8]) -> Self {
        match tag {
            Tag::I8 => Self::I8(i8::unpack(payload)),
            Tag::I16 => Self::I16(i16::unpack(payload)),
            Tag::I32 => Self::I32(i32::unpack(payload)),
            Tag::I64 => Self::I64(i64::unpack(payload)),
            Tag::U8 => Self::U8(u8::unpack(payload)),
            Tag::U16 => Self::U16(u16::unpack(payload)),
            Tag::U32 => Self::U32(u32::unpack(payload)),
            Tag::U64 => Self::U64(u64::unpack(payload)),
            Tag::F32 => Self::F32(f32::unpack(payload)),
            Tag::F64 => Self::F64(f64::unpack(payload)),
            Tag::String => match core::str::from_utf8(payload) {
                Ok(s) => Self::Str(s),
                Err(_) => Self::Bytes(payload),
            },
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v:?}"),
            Self::F64(v) => write!(f, "{v:?}"),
            Self::Str(v) => write!(f, "{v:?}"),
            Self::Bytes(v) => {
                f.write_str("0x")?;
                for byte in v.iter() {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::Unknown => f.write_str("?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(Value::decode(Tag::I8, &[0xff]), Value::I8(-1));
        assert_eq!(Value::decode(Tag::U16, &[0x01, 0x02]), Value::U16(0x0201));
        assert_eq!(Value::decode(Tag::String, b"go"), Value::Str("go"));
        assert_eq!(
            Value::decode(Tag::String, &[0xff, 0xfe]),
            Value::Bytes(&[0xff, 0xfe])
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::I32(-100).to_string(), "-100");
        assert_eq!(Value::F32(1.0).to_string(), "1.0");
        assert_eq!(Value::F64(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Str("go").to_string(), "\"go\"");
        assert_eq!(Value::Bytes(&[0xab, 0x01]).to_string(), "0xab01");
        assert_eq!(Value::Unknown.to_string(), "?");
    }
}
