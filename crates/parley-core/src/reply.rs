//! The reply shapes an invocation can produce, and their reduction to text.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Everything an agent invocation can hand back.
///
/// The provider adapter always yields `Chat`; the other arms cover tool-layer
/// output and any future adapter that returns bare text or arbitrary JSON.
/// Keeping this a closed sum means `normalize` can be total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RawReply {
    /// Already plain text.
    Text(String),
    /// An assistant message whose content field carries the payload.
    Chat(Message),
    /// Anything else; stringified on normalization.
    Value(serde_json::Value),
}

impl From<String> for RawReply {
    fn from(s: String) -> Self {
        RawReply::Text(s)
    }
}

impl From<Message> for RawReply {
    fn from(m: Message) -> Self {
        RawReply::Chat(m)
    }
}

/// Reduce a reply to displayable text. Never fails: unknown shapes degrade
/// to their serialized representation rather than propagating an error.
pub fn normalize(reply: &RawReply) -> String {
    match reply {
        RawReply::Text(s) => s.clone(),
        RawReply::Chat(msg) => msg.content.clone(),
        RawReply::Value(serde_json::Value::String(s)) => s.clone(),
        RawReply::Value(serde_json::Value::Null) => String::new(),
        RawReply::Value(v) => v.to_string(),
    }
}
