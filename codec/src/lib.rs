//! Pack callback actions into fixed 64-byte button payloads.
//!
//! # Overview
//!
//! Messaging platforms attach opaque callback data to interactive buttons and hand
//! it back verbatim when the button is pressed. The data is capped at 64 bytes.
//! An [EncodedAction] packs everything needed to handle the press into that
//! budget:
//!
//! - the [ViewId] of the handler that should process it,
//! - the [SessionId] of the conversation it belongs to,
//! - a list of typed arguments (integers, floats and short strings).
//!
//! Arguments are appended to a fixed region with a bump allocator and read back
//! with a type-filtered forward scan. Nothing is allocated on either path.
//!
//! # Format
//!
//! See [layout] for field offsets. Each argument is a tag byte ([Tag]) followed
//! by a little-endian payload; strings carry a length byte before their content.
//!
//! # Errors
//!
//! Writers return [Error] when an argument does not fit, and never write
//! partially. Readers return `None` when no matching argument exists or the
//! payload is malformed. Foreign payloads never cause a panic.
//!
//! # Example
//!
//! ```
//! use keypad_codec::{EncodedAction, SessionId, ViewId};
//!
//! let mut action = EncodedAction::new();
//! action.set_view_id(ViewId(1));
//! action.set_session_id(SessionId(99));
//! let page = action.put_u16(3).unwrap();
//! action.put_str("next").unwrap();
//!
//! // `as_bytes()` is attached to the button, and comes back on press.
//! let pressed = EncodedAction::from_slice(action.as_bytes()).unwrap();
//! assert_eq!(pressed.get_u16(page), Some(3));
//! assert_eq!(pressed.get_str(0), Some("next"));
//!
//! for node in pressed.dump() {
//!     println!("{node}");
//! }
//! ```

mod action;
mod allocator;
pub mod config;
mod dump;
pub mod error;
mod get;
pub mod layout;
pub mod primitives;
mod put;
pub mod tag;
pub mod value;

pub use action::{EncodedAction, SessionId, ViewId};
pub use config::{Config, RangeCfg};
pub use dump::{DumpNode, NodeKind};
pub use error::Error;
pub use get::{Arg, Args};
pub use primitives::Primitive;
pub use tag::Tag;
pub use value::Value;
