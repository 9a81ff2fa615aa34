//! Bump allocation inside the argument region.
//!
//! Arguments are appended at the free offset, which only moves forward until the
//! action is reset. Space is claimed only once it is known to fit, so a failed
//! reservation leaves the action untouched.

use crate::{
    layout::{ARGS, FREE_OFFSET, SIZE},
    tag::Tag,
    EncodedAction, Error,
};
use tracing::trace;

impl EncodedAction {
    /// Returns the free offset if the header can accept another argument.
    ///
    /// Payloads wrapped from foreign data may carry a cursor outside the argument
    /// region or a saturated counter.
    fn cursor(&self) -> Result<usize, Error> {
        let free = self.free_offset();
        let offset = free as usize;
        if !(ARGS.offset..=SIZE).contains(&offset) || self.arg_count() == u8::MAX {
            return Err(Error::InvalidCursor(free));
        }
        Ok(offset)
    }

    /// Writes `tag` at the free offset and claims `required` bytes for it.
    ///
    /// Returns the offset of the tag.
    fn claim(&mut self, tag: Tag, required: usize) -> Result<usize, Error> {
        let start = self.cursor()?;
        let remaining = SIZE - start;
        if required > remaining {
            trace!(%tag, required, remaining, "argument does not fit");
            return Err(Error::CapacityExceeded {
                required,
                remaining,
            });
        }
        self.0[start] = tag as u8;
        self.0[FREE_OFFSET.offset] = (start + required) as u8;
        Ok(start)
    }

    /// Reserves space for a fixed-width argument and writes its tag.
    ///
    /// Returns the offset of the payload.
    pub(crate) fn reserve(&mut self, tag: Tag) -> Result<usize, Error> {
        let Some(required) = tag.bytes_required() else {
            // Variable-width tags never fit through this path.
            return Err(Error::CapacityExceeded {
                required: SIZE,
                remaining: self.remaining(),
            });
        };
        Ok(self.claim(tag, required)? + 1)
    }

    /// Reserves space for a string argument of `len` bytes and writes its tag and
    /// length.
    ///
    /// Returns the offset of the content.
    pub(crate) fn reserve_str(&mut self, len: usize) -> Result<usize, Error> {
        let stored = u8::try_from(len).map_err(|_| Error::StringTooLong(len))?;
        let start = self.claim(Tag::String, 2 + len)?;
        self.0[start + 1] = stored;
        Ok(start + 2)
    }
}
