//! Argument readers.
//!
//! Arguments are located by walking the region from its start: the width of
//! each argument is only known from its tag (and, for strings, its length byte).
//!
//! A read with start index `n` first skips exactly `n` arguments, then returns
//! the first argument of the requested type at or after that position. Reading
//! from `index + 1` of the previous match therefore enumerates all arguments of
//! one type in write order.
//!
//! Reads never panic: an unknown tag, or an argument reaching past the free
//! offset, ends the walk and the read returns `None`.

use crate::{
    layout::ARGS, primitives::Primitive, tag::Tag, value::Value, EncodedAction,
};
use paste::paste;
use tracing::debug;

/// An argument located in the region.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Slot<'a> {
    pub tag: Tag,
    /// Offset of the tag byte.
    pub offset: usize,
    /// Payload bytes (content bytes for strings).
    pub payload: &'a [u8],
    /// Offset of the following argument.
    pub next: usize,
}

impl Slot<'_> {
    /// Offset of the payload (content for strings).
    pub fn payload_offset(&self) -> usize {
        self.next - self.payload.len()
    }
}

impl EncodedAction {
    /// Locates the argument whose tag is at `offset`.
    pub(crate) fn slot(&self, offset: usize) -> Option<Slot<'_>> {
        let end = self.args_end();
        if offset < ARGS.offset || offset >= end {
            return None;
        }
        let raw = self.0[offset];
        let Some(tag) = Tag::from_u8(raw) else {
            debug!(offset, tag = raw, "unknown argument tag");
            return None;
        };
        let (start, next) = match tag.bytes_required() {
            Some(width) => (offset + 1, offset + width),
            None => {
                if offset + 2 > end {
                    return None;
                }
                let len = self.0[offset + 1] as usize;
                (offset + 2, offset + 2 + len)
            }
        };
        if next > end {
            return None;
        }
        Some(Slot {
            tag,
            offset,
            payload: &self.0[start..next],
            next,
        })
    }

    /// Finds the first argument tagged `tag`, skipping `start` arguments first.
    pub(crate) fn find(&self, start: u8, tag: Tag) -> Option<Slot<'_>> {
        if start >= self.arg_count() {
            return None;
        }
        let mut offset = ARGS.offset;
        for _ in 0..start {
            offset = self.slot(offset)?.next;
        }
        while offset < self.args_end() {
            let slot = self.slot(offset)?;
            if slot.tag == tag {
                return Some(slot);
            }
            offset = slot.next;
        }
        None
    }

    /// Reads the first fixed-width argument of type `T` at or after argument
    /// `start`.
    pub fn get<T: Primitive>(&self, start: u8) -> Option<T> {
        let slot = self.find(start, T::TAG)?;
        Some(T::unpack(slot.payload))
    }

    /// Reads the first string argument at or after argument `start`.
    ///
    /// Returns `None` if the stored bytes are not valid UTF-8.
    pub fn get_str(&self, start: u8) -> Option<&str> {
        core::str::from_utf8(self.get_bytes(start)?).ok()
    }

    /// Reads the raw bytes of the first string argument at or after argument
    /// `start`.
    pub fn get_bytes(&self, start: u8) -> Option<&[u8]> {
        Some(self.find(start, Tag::String)?.payload)
    }

    /// Reads the first `i32` argument at or after argument `start` as an `isize`.
    pub fn get_isize(&self, start: u8) -> Option<isize> {
        isize::try_from(self.get::<i32>(start)?).ok()
    }

    /// Reads the first `u32` argument at or after argument `start` as a `usize`.
    pub fn get_usize(&self, start: u8) -> Option<usize> {
        usize::try_from(self.get::<u32>(start)?).ok()
    }

    /// Iterates over the stored arguments in write order.
    ///
    /// Iteration stops early at the first argument that cannot be decoded.
    pub fn args(&self) -> Args<'_> {
        Args {
            action: self,
            index: 0,
            offset: ARGS.offset,
        }
    }
}

macro_rules! impl_get {
    ($($type:ty),*) => {
        paste! {
            impl EncodedAction {
                $(
                    #[doc = concat!("Reads the first `", stringify!($type), "` argument at or after argument `start`.")]
                    pub fn [<get_ $type>](&self, start: u8) -> Option<$type> {
                        self.get(start)
                    }
                )*
            }
        }
    };
}

impl_get!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// A stored argument.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arg<'a> {
    /// Position in write order.
    pub index: u8,
    /// Offset of the tag byte.
    pub offset: u8,
    pub tag: Tag,
    pub value: Value<'a>,
}

/// Iterator over stored arguments, see [EncodedAction::args].
pub struct Args<'a> {
    action: &'a EncodedAction,
    index: u8,
    offset: usize,
}

impl<'a> Iterator for Args<'a> {
    type Item = Arg<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.action.arg_count() {
            return None;
        }
        let Some(slot) = self.action.slot(self.offset) else {
            // Nothing past an undecodable argument can be located.
            self.index = self.action.arg_count();
            return None;
        };
        let arg = Arg {
            index: self.index,
            offset: slot.offset as u8,
            tag: slot.tag,
            value: Value::decode(slot.tag, slot.payload),
        };
        self.index += 1;
        self.offset = slot.next;
        Some(arg)
    }
}
