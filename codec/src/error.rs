//! Error types for encoded action operations

use thiserror::Error;

/// Error type for encoded action operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("capacity exceeded: {required} > {remaining}")]
    CapacityExceeded { required: usize, remaining: usize },
    #[error("string too long: {0} > 255")]
    StringTooLong(usize),
    #[error("value out of range for {0}")]
    OutOfRange(&'static str),
    #[error("invalid cursor: {0}")]
    InvalidCursor(u8),
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid length: {0}")]
    InvalidLength(usize),
}
