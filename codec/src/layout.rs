//! Byte layout of an encoded action.
//!
//! ```text
//! 0        4          8       9        10                               64
//! +--------+----------+-------+--------+--------------------------------+
//! | view   | session  | count | free   | tag | payload | tag | payload .. |
//! +--------+----------+-------+--------+--------------------------------+
//! ```
//!
//! All multi-byte fields are little-endian.

use core::ops::Range;

/// Total size of an encoded action in bytes.
///
/// This is the ceiling the messaging platform enforces on button callback data.
pub const SIZE: usize = 64;

/// A fixed region of the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    /// Offset of the first byte.
    pub offset: usize,
    /// Number of bytes.
    pub width: usize,
}

impl Field {
    /// Offset one past the last byte.
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }

    /// Byte range of the field.
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

/// Identifier of the view (handler) the action targets.
pub const VIEW_ID: Field = Field {
    offset: 0,
    width: 4,
};

/// Identifier of the session the action belongs to.
pub const SESSION_ID: Field = Field {
    offset: 4,
    width: 4,
};

/// Number of arguments written since initialization.
pub const ARG_COUNT: Field = Field {
    offset: 8,
    width: 1,
};

/// Offset at which the next argument will be written.
pub const FREE_OFFSET: Field = Field {
    offset: 9,
    width: 1,
};

/// Region holding the tagged arguments.
pub const ARGS: Field = Field {
    offset: 10,
    width: SIZE - 10,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_contiguous() {
        assert_eq!(VIEW_ID.end(), SESSION_ID.offset);
        assert_eq!(SESSION_ID.end(), ARG_COUNT.offset);
        assert_eq!(ARG_COUNT.end(), FREE_OFFSET.offset);
        assert_eq!(FREE_OFFSET.end(), ARGS.offset);
        assert_eq!(ARGS.end(), SIZE);
        assert_eq!(ARGS.width, 54);
    }

    #[test]
    fn test_identifier_widths() {
        assert_eq!(VIEW_ID.width, core::mem::size_of::<u32>());
        assert_eq!(SESSION_ID.width, core::mem::size_of::<u32>());
    }

    #[test]
    fn test_cursor_fits_in_a_byte() {
        assert!(SIZE <= u8::MAX as usize);
    }
}
