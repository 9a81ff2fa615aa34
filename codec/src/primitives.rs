//! Fixed-width packers for primitive argument types.
//!
//! Integers are written little-endian. Floats are written as the little-endian
//! integer with the same bit pattern, so every value (NaN payloads and signed
//! zeros included) survives a round trip unchanged.

use crate::tag::Tag;
use bytes::{Buf, BufMut};

mod private {
    pub trait Sealed {}
}

/// A fixed-width value that can be stored as an argument.
///
/// Implemented for `i8`..`i64`, `u8`..`u64`, `f32` and `f64`.
pub trait Primitive: private::Sealed + Copy {
    /// Tag written in front of the payload.
    const TAG: Tag;

    /// Width of the payload in bytes.
    const SIZE: usize;

    /// Writes the value into `buf`, which must be at least [Self::SIZE] bytes long.
    fn pack(self, buf: &mut [u8]);

    /// Reads a value from `buf`, which must be at least [Self::SIZE] bytes long.
    fn unpack(buf: &[u8]) -> Self;
}

macro_rules! impl_integer {
    ($type:ty, $tag:ident, $read_method:ident, $write_method:ident) => {
        impl private::Sealed for $type {}

        impl Primitive for $type {
            const TAG: Tag = Tag::$tag;
            const SIZE: usize = core::mem::size_of::<$type>();

            #[inline]
            fn pack(self, mut buf: &mut [u8]) {
                buf.$write_method(self);
            }

            #[inline]
            fn unpack(mut buf: &[u8]) -> Self {
                buf.$read_method()
            }
        }
    };
}

impl_integer!(i8, I8, get_i8, put_i8);
impl_integer!(i16, I16, get_i16_le, put_i16_le);
impl_integer!(i32, I32, get_i32_le, put_i32_le);
impl_integer!(i64, I64, get_i64_le, put_i64_le);
impl_integer!(u8, U8, get_u8, put_u8);
impl_integer!(u16, U16, get_u16_le, put_u16_le);
impl_integer!(u32, U32, get_u32_le, put_u32_le);
impl_integer!(u64, U64, get_u64_le, put_u64_le);

macro_rules! impl_float {
    ($type:ty, $bits:ty, $tag:ident, $read_method:ident, $write_method:ident) => {
        impl private::Sealed for $type {}

        impl Primitive for $type {
            const TAG: Tag = Tag::$tag;
            const SIZE: usize = core::mem::size_of::<$bits>();

            #[inline]
            fn pack(self, mut buf: &mut [u8]) {
                buf.$write_method(self.to_bits());
            }

            #[inline]
            fn unpack(mut buf: &[u8]) -> Self {
                <$type>::from_bits(buf.$read_method())
            }
        }
    };
}

impl_float!(f32, u32, F32, get_u32_le, put_u32_le);
impl_float!(f64, u64, F64, get_u64_le, put_u64_le);
