//! Decoding errors.

use thiserror::Error;

/// Reasons an inbound message cannot be turned into a request.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The body is not JSON at all.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    /// JSON, but not an envelope (not an object, no `messageType`).
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
    /// The envelope names a message type the server does not accept.
    #[error("unsupported message type: {0}")]
    UnsupportedMessageType(String),
    /// The payload does not have the shape its message type requires.
    #[error("malformed {message_type} payload: {reason}")]
    MalformedPayload {
        message_type: String,
        reason: String,
    },
}
