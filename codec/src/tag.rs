//! Argument type tags.

use core::fmt;

/// The byte preceding every argument, identifying its type.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    I8 = 10,
    I16 = 11,
    I32 = 12,
    I64 = 13,
    U8 = 14,
    U16 = 15,
    U32 = 16,
    U64 = 17,
    F32 = 18,
    F64 = 19,
    String = 20,
}

impl Tag {
    /// Parses a raw tag byte. Returns `None` for unknown tags.
    #[inline]
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            10 => Some(Self::I8),
            11 => Some(Self::I16),
            12 => Some(Self::I32),
            13 => Some(Self::I64),
            14 => Some(Self::U8),
            15 => Some(Self::U16),
            16 => Some(Self::U32),
            17 => Some(Self::U64),
            18 => Some(Self::F32),
            19 => Some(Self::F64),
            20 => Some(Self::String),
            _ => None,
        }
    }

    /// Number of bytes (tag included) an argument of this type occupies.
    ///
    /// Returns `None` for [Tag::String], whose width depends on its content.
    #[inline]
    pub const fn bytes_required(self) -> Option<usize> {
        match self {
            Self::I8 | Self::U8 => Some(2),
            Self::I16 | Self::U16 => Some(3),
            Self::I32 | Self::U32 | Self::F32 => Some(5),
            Self::I64 | Self::U64 | Self::F64 => Some(9),
            Self::String => None,
        }
    }

    /// Name of the type, as shown in dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::F32 => "float32",
            Self::F64 => "float64",
            Self::String => "string",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
