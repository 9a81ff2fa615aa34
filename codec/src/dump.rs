//! Human-readable breakdown of an encoded action.
//!
//! Argument values come from the same decoder as [EncodedAction::args] and the
//! typed readers.

use crate::{
    layout::{ARGS, ARG_COUNT, FREE_OFFSET, SESSION_ID, VIEW_ID},
    tag::Tag,
    value::Value,
    EncodedAction,
};
use core::fmt;

/// What a [DumpNode] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    ViewId,
    SessionId,
    ArgCount,
    FreeOffset,
    /// An argument, `None` if its tag is not recognized.
    Argument(Option<Tag>),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewId => f.write_str("view id"),
            Self::SessionId => f.write_str("session id"),
            Self::ArgCount => f.write_str("argument count"),
            Self::FreeOffset => f.write_str("free offset"),
            Self::Argument(Some(tag)) => write!(f, "argument ({tag})"),
            Self::Argument(None) => f.write_str("argument (unknown)"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NodeKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One field or argument of an encoded action.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DumpNode<'a> {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: NodeKind,
    /// Offset where the node starts.
    pub pos: u8,
    /// Offset of the tag byte, for arguments.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub pos_type: Option<u8>,
    /// Offset of the payload (content for strings), for arguments.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "pos_value", skip_serializing_if = "Option::is_none")
    )]
    pub pos_content: Option<u8>,
    /// Raw tag byte, for arguments.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type_encoded", skip_serializing_if = "Option::is_none")
    )]
    pub type_header: Option<u8>,
    pub value: Value<'a>,
}

impl<'a> DumpNode<'a> {
    fn field(kind: NodeKind, pos: usize, value: Value<'a>) -> Self {
        Self {
            kind,
            pos: pos as u8,
            pos_type: None,
            pos_content: None,
            type_header: None,
            value,
        }
    }
}

impl fmt::Display for DumpNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:02}] {} = {}", self.pos, self.kind, self.value)
    }
}

impl EncodedAction {
    /// Breaks the action down into its header fields and arguments, in buffer
    /// order.
    ///
    /// Stops after a node with [Value::Unknown] if an argument cannot be decoded.
    pub fn dump(&self) -> Vec<DumpNode<'_>> {
        let count = self.arg_count();
        let mut nodes = Vec::with_capacity(4 + count as usize);
        nodes.push(DumpNode::field(
            NodeKind::ViewId,
            VIEW_ID.offset,
            Value::U32(self.view_id().0),
        ));
        nodes.push(DumpNode::field(
            NodeKind::SessionId,
            SESSION_ID.offset,
            Value::U32(self.session_id().0),
        ));
        nodes.push(DumpNode::field(
            NodeKind::ArgCount,
            ARG_COUNT.offset,
            Value::U8(count),
        ));
        nodes.push(DumpNode::field(
            NodeKind::FreeOffset,
            FREE_OFFSET.offset,
            Value::U8(self.free_offset()),
        ));

        let mut offset = ARGS.offset;
        for _ in 0..count {
            match self.slot(offset) {
                Some(slot) => {
                    nodes.push(DumpNode {
                        kind: NodeKind::Argument(Some(slot.tag)),
                        pos: slot.offset as u8,
                        pos_type: Some(slot.offset as u8),
                        pos_content: Some(slot.payload_offset() as u8),
                        type_header: Some(slot.tag as u8),
                        value: Value::decode(slot.tag, slot.payload),
                    });
                    offset = slot.next;
                }
                None => {
                    let header = self.0.get(offset).copied();
                    nodes.push(DumpNode {
                        kind: NodeKind::Argument(header.and_then(Tag::from_u8)),
                        pos: offset as u8,
                        pos_type: Some(offset as u8),
                        pos_content: None,
                        type_header: header,
                        value: Value::Unknown,
                    });
                    break;
                }
            }
        }
        nodes
    }
}
