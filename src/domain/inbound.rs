//! Classification of inbound WebSocket frames.

use std::fmt;

use axum::extract::ws::Message;

/// Literal text sent back for every inbound data message.
pub const PONG_REPLY: &str = "pong";

/// A data message received from a client.
///
/// Control frames (ping, pong, close) are not payloads and never produce
/// an `InboundPayload`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundPayload<'a> {
    /// UTF-8 text frame.
    Text(&'a str),
    /// Binary frame.
    Binary(&'a [u8]),
}

impl<'a> InboundPayload<'a> {
    /// Borrows the payload of a data message, or `None` for control frames.
    #[must_use]
    pub fn from_message(msg: &'a Message) -> Option<Self> {
        match msg {
            Message::Text(text) => Some(Self::Text(text.as_str())),
            Message::Binary(bytes) => Some(Self::Binary(bytes.as_ref())),
            Message::Ping(_) | Message::Pong(_) | Message::Close(_) => None,
        }
    }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Binary(bytes) => bytes.len(),
        }
    }

    /// Returns `true` for a zero-length payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short frame-type label used as a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Binary(_) => "binary",
        }
    }
}

/// Renders the payload for logging. Binary data is decoded as lossy UTF-8.
impl fmt::Display for InboundPayload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Binary(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
        }
    }
}
