//! The fixed-size encoded action.

use crate::{
    config::Config,
    layout::{ARGS, ARG_COUNT, FREE_OFFSET, SESSION_ID, SIZE, VIEW_ID},
    primitives::Primitive,
    Error,
};
use core::fmt;
use tracing::debug;

/// Identifier of the view (handler) an action targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(pub u32);

/// Identifier of the session an action belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(pub u32);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A callback action packed into the 64 bytes a button can carry.
///
/// An action is built by the code creating a button (identifiers first, then
/// arguments) and decoded from the raw callback data once the button is pressed.
/// It is a plain value: copies share nothing.
///
/// # Example
///
/// ```
/// use keypad_codec::{EncodedAction, SessionId, ViewId};
///
/// let mut action = EncodedAction::new();
/// action.set_view_id(ViewId(42));
/// action.set_session_id(SessionId(7));
/// assert_eq!(action.put_i32(-100), Ok(0));
/// assert_eq!(action.put_str("go"), Ok(1));
///
/// let received = EncodedAction::from_slice(action.as_bytes()).unwrap();
/// assert_eq!(received.view_id(), ViewId(42));
/// assert_eq!(received.get_i32(0), Some(-100));
/// assert_eq!(received.get_str(0), Some("go"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EncodedAction(pub(crate) [u8; SIZE]);

impl EncodedAction {
    /// Creates an initialized action with no arguments and zeroed identifiers.
    pub fn new() -> Self {
        let mut buf = [0u8; SIZE];
        buf[FREE_OFFSET.offset] = ARGS.offset as u8;
        Self(buf)
    }

    /// Wraps an inbound payload without re-initializing it.
    ///
    /// Payloads shorter than [SIZE] are zero-padded. Arguments that fall into the
    /// missing tail simply cannot be read.
    pub fn from_slice(buf: &[u8]) -> Result<Self, Error> {
        Self::from_slice_cfg(buf, &Config::default())
    }

    /// Wraps an inbound payload, rejecting lengths not allowed by `cfg`.
    pub fn from_slice_cfg(buf: &[u8], cfg: &Config) -> Result<Self, Error> {
        if buf.len() > SIZE {
            debug!(len = buf.len(), "rejected oversized payload");
            return Err(Error::ExtraData(buf.len() - SIZE));
        }
        if !cfg.len.contains(&buf.len()) {
            debug!(len = buf.len(), "rejected payload length");
            return Err(Error::InvalidLength(buf.len()));
        }
        let mut raw = [0u8; SIZE];
        raw[..buf.len()].copy_from_slice(buf);
        Ok(Self(raw))
    }

    /// Clears all arguments, keeping the identifiers.
    pub fn reset(&mut self) {
        self.0[ARGS.range()].fill(0);
        self.0[ARG_COUNT.offset] = 0;
        self.0[FREE_OFFSET.offset] = ARGS.offset as u8;
    }

    /// Raw bytes to attach as callback data.
    pub fn as_bytes(&self) -> &[u8; SIZE] {
        &self.0
    }

    /// Consumes the action, returning its raw bytes.
    pub fn into_bytes(self) -> [u8; SIZE] {
        self.0
    }

    /// Sets the identifier of the target view.
    pub fn set_view_id(&mut self, id: ViewId) {
        self.write(VIEW_ID.offset, id.0);
    }

    /// Identifier of the target view.
    pub fn view_id(&self) -> ViewId {
        ViewId(self.read(VIEW_ID.offset))
    }

    /// Sets the identifier of the session.
    pub fn set_session_id(&mut self, id: SessionId) {
        self.write(SESSION_ID.offset, id.0);
    }

    /// Identifier of the session.
    pub fn session_id(&self) -> SessionId {
        SessionId(self.read(SESSION_ID.offset))
    }

    /// Number of arguments written since initialization.
    pub fn arg_count(&self) -> u8 {
        self.0[ARG_COUNT.offset]
    }

    /// Offset at which the next argument will be written.
    pub fn free_offset(&self) -> u8 {
        self.0[FREE_OFFSET.offset]
    }

    /// Bytes still available in the argument region.
    ///
    /// Zero when the cursor of a wrapped payload is invalid.
    pub fn remaining(&self) -> usize {
        let free = self.free_offset() as usize;
        if free < ARGS.offset {
            return 0;
        }
        SIZE.saturating_sub(free)
    }

    /// Offset of the end of written arguments, clamped to the buffer.
    pub(crate) fn args_end(&self) -> usize {
        (self.free_offset() as usize).min(SIZE)
    }

    /// Increments the argument counter, returning its previous value.
    pub(crate) fn bump_count(&mut self) -> u8 {
        let index = self.arg_count();
        self.0[ARG_COUNT.offset] = index.wrapping_add(1);
        index
    }

    pub(crate) fn write<T: Primitive>(&mut self, offset: usize, v: T) {
        v.pack(&mut self.0[offset..offset + T::SIZE]);
    }

    pub(crate) fn read<T: Primitive>(&self, offset: usize) -> T {
        T::unpack(&self.0[offset..offset + T::SIZE])
    }
}

impl Default for EncodedAction {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[u8; SIZE]> for EncodedAction {
    fn from(value: [u8; SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for EncodedAction {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(value)
    }
}

impl AsRef<[u8]> for EncodedAction {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for EncodedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedAction")
            .field("view_id", &self.view_id())
            .field("session_id", &self.session_id())
            .field("arg_count", &self.arg_count())
            .field("free_offset", &self.free_offset())
            .finish()
    }
}

impl fmt::Display for EncodedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeCfg;

    #[test]
    fn test_new() {
        let action = EncodedAction::new();
        assert_eq!(action.arg_count(), 0);
        assert_eq!(action.free_offset(), 10);
        assert_eq!(action.remaining(), 54);
        assert_eq!(action.view_id(), ViewId(0));
        assert_eq!(action.session_id(), SessionId(0));
        assert_eq!(EncodedAction::default(), action);
    }

    #[test]
    fn test_identifiers() {
        let mut action = EncodedAction::new();
        action.set_view_id(ViewId(0xdead_beef));
        action.set_session_id(SessionId(7));
        assert_eq!(action.view_id(), ViewId(0xdead_beef));
        assert_eq!(action.session_id(), SessionId(7));
        assert_eq!(&action.as_bytes()[..8], &[0xef, 0xbe, 0xad, 0xde, 7, 0, 0, 0]);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = EncodedAction::new();
        original.set_view_id(ViewId(1));
        let mut copy = original;
        copy.set_view_id(ViewId(2));
        copy.put_u8(3).unwrap();
        assert_eq!(original.view_id(), ViewId(1));
        assert_eq!(original.arg_count(), 0);
        assert_eq!(copy.view_id(), ViewId(2));
        assert_eq!(copy.arg_count(), 1);
    }

    #[test]
    fn test_reset() {
        let mut action = EncodedAction::new();
        action.set_view_id(ViewId(9));
        action.put_u64(u64::MAX).unwrap();
        action.put_str("abc").unwrap();
        action.reset();
        assert_eq!(action.arg_count(), 0);
        assert_eq!(action.free_offset(), 10);
        assert_eq!(action.view_id(), ViewId(9));
        assert!(action.as_bytes()[10..].iter().all(|b| *b == 0));
        assert_eq!(action.put_str("x"), Ok(0));
    }

    #[test]
    fn test_from_slice() {
        let mut action = EncodedAction::new();
        action.set_session_id(SessionId(5));
        action.put_i16(-3).unwrap();

        let wrapped = EncodedAction::from_slice(action.as_bytes()).unwrap();
        assert_eq!(wrapped, action);
        let wrapped = EncodedAction::try_from(&action.as_bytes()[..]).unwrap();
        assert_eq!(wrapped, action);
        assert_eq!(EncodedAction::from(action.into_bytes()), action);
    }

    #[test]
    fn test_from_slice_short() {
        let mut action = EncodedAction::new();
        action.put_u8(1).unwrap();
        action.put_u32(2).unwrap();

        // The second argument's tag falls into the zero-padded tail.
        let wrapped = EncodedAction::from_slice(&action.as_bytes()[..12]).unwrap();
        assert_eq!(wrapped.arg_count(), 2);
        assert_eq!(wrapped.get_u8(0), Some(1));
        assert_eq!(wrapped.get_u32(0), None);

        let empty = EncodedAction::from_slice(&[]).unwrap();
        assert_eq!(empty.arg_count(), 0);
        assert_eq!(empty.remaining(), 0);
    }

    #[test]
    fn test_from_slice_rejected() {
        assert_eq!(
            EncodedAction::from_slice(&[0u8; SIZE + 3]),
            Err(Error::ExtraData(3))
        );
        assert_eq!(
            EncodedAction::from_slice_cfg(&[0u8; 12], &Config::strict()),
            Err(Error::InvalidLength(12))
        );
        let cfg = Config {
            len: RangeCfg::new(10..),
        };
        assert_eq!(
            EncodedAction::from_slice_cfg(&[0u8; SIZE + 1], &cfg),
            Err(Error::ExtraData(1))
        );
        assert!(EncodedAction::from_slice_cfg(&[0u8; 10], &cfg).is_ok());
    }

    #[test]
    fn test_display() {
        let mut action = EncodedAction::new();
        action.set_view_id(ViewId(0x0a0b));
        let hex = action.to_string();
        assert_eq!(hex.len(), SIZE * 2);
        assert!(hex.starts_with("0b0a0000"));
        assert_eq!(&hex[16..20], "000a");
    }
}
