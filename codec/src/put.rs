//! Argument writers.
//!
//! Every writer either appends the whole argument and returns its index, or
//! returns an error and leaves the action unchanged.

use crate::{primitives::Primitive, EncodedAction, Error};
use paste::paste;

macro_rules! impl_put {
    ($($type:ty),*) => {
        paste! {
            impl EncodedAction {
                $(
                    #[doc = concat!("Appends a `", stringify!($type), "` argument, returning its index.")]
                    pub fn [<put_ $type>](&mut self, v: $type) -> Result<u8, Error> {
                        self.put(v)
                    }
                )*
            }
        }
    };
}

impl_put!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl EncodedAction {
    /// Appends a fixed-width argument, returning its index.
    pub fn put<T: Primitive>(&mut self, v: T) -> Result<u8, Error> {
        let offset = self.reserve(T::TAG)?;
        self.write(offset, v);
        Ok(self.bump_count())
    }

    /// Appends a string argument of at most 255 bytes, returning its index.
    pub fn put_str(&mut self, v: &str) -> Result<u8, Error> {
        self.put_bytes(v.as_bytes())
    }

    /// Appends raw bytes as a string argument, returning its index.
    pub fn put_bytes(&mut self, v: &[u8]) -> Result<u8, Error> {
        let offset = self.reserve_str(v.len())?;
        self.0[offset..offset + v.len()].copy_from_slice(v);
        Ok(self.bump_count())
    }

    /// Appends an `isize` as an `i32` argument, returning its index.
    pub fn put_isize(&mut self, v: isize) -> Result<u8, Error> {
        let v = i32::try_from(v).map_err(|_| Error::OutOfRange("int32"))?;
        self.put(v)
    }

    /// Appends a `usize` as a `u32` argument, returning its index.
    pub fn put_usize(&mut self, v: usize) -> Result<u8, Error> {
        let v = u32::try_from(v).map_err(|_| Error::OutOfRange("uint32"))?;
        self.put(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    #[test]
    fn test_put_returns_index() {
        let mut action = EncodedAction::new();
        assert_eq!(action.put_i8(-1), Ok(0));
        assert_eq!(action.put_str("hi"), Ok(1));
        assert_eq!(action.put_f64(1.5), Ok(2));
        assert_eq!(action.arg_count(), 3);
        assert_eq!(action.free_offset(), 10 + 2 + 4 + 9);
    }

    #[test]
    fn test_put_layout() {
        let mut action = EncodedAction::new();
        action.put_u16(0x0102).unwrap();
        action.put_str("ab").unwrap();
        assert_eq!(
            &action.as_bytes()[10..17],
            &[Tag::U16 as u8, 0x02, 0x01, Tag::String as u8, 2, b'a', b'b']
        );
    }

    #[test]
    fn test_put_failure_leaves_action_unchanged() {
        let mut action = EncodedAction::new();
        action.put_str(&"x".repeat(45)).unwrap();
        let before = action;
        assert_eq!(action.remaining(), 7);

        assert_eq!(
            action.put_i64(1),
            Err(Error::CapacityExceeded {
                required: 9,
                remaining: 7
            })
        );
        assert_eq!(
            action.put_str("abcdef"),
            Err(Error::CapacityExceeded {
                required: 8,
                remaining: 7
            })
        );
        assert_eq!(action, before);

        assert_eq!(action.put_str("abcde"), Ok(1));
        assert_eq!(action.remaining(), 0);
    }

    #[test]
    fn test_put_empty_string() {
        let mut action = EncodedAction::new();
        assert_eq!(action.put_str(""), Ok(0));
        assert_eq!(action.free_offset(), 12);
        assert_eq!(action.get_str(0), Some(""));
    }

    #[test]
    fn test_put_string_too_long() {
        let mut action = EncodedAction::new();
        let long = vec![0u8; 300];
        assert_eq!(action.put_bytes(&long), Err(Error::StringTooLong(300)));
        assert_eq!(action.arg_count(), 0);
    }

    #[test]
    fn test_put_narrowing() {
        let mut action = EncodedAction::new();
        assert_eq!(action.put_isize(-5), Ok(0));
        assert_eq!(action.put_usize(5), Ok(1));
        assert_eq!(action.get_i32(0), Some(-5));
        assert_eq!(action.get_u32(0), Some(5));

        #[cfg(target_pointer_width = "64")]
        {
            assert_eq!(
                action.put_isize(i64::MAX as isize),
                Err(Error::OutOfRange("int32"))
            );
            assert_eq!(
                action.put_usize(u64::MAX as usize),
                Err(Error::OutOfRange("uint32"))
            );
            assert_eq!(action.arg_count(), 2);
        }
    }
}
