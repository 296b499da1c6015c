//! # radmcp-protocol
//!
//! Wire format for the gateway: a JSON envelope
//! `{ version, messageType, message }` and one payload type per
//! message type.
//!
//! Inbound requests are decoded through [`Inbound`], which validates the
//! payload for the message types the server accepts. Everything the
//! server emits is an [`Envelope`] around a typed [`Message`].

pub mod descriptor;
pub mod envelope;
pub mod error;
pub mod messages;

pub use descriptor::{ParameterSchema, PropertySchema, ToolDescriptor};
pub use envelope::{Envelope, Inbound, Message, MessageType, RawEnvelope, Request};
pub use error::ProtocolError;
pub use messages::*;

/// Protocol version carried by every envelope the server sends.
pub const PROTOCOL_VERSION: &str = "0.1";

/// Server-sent event names that are not envelope message types.
pub mod events {
    /// Keep-alive event; its data is an empty JSON object.
    pub const PING: &str = "ping";
    /// Data carried by a keep-alive event.
    pub const PING_DATA: &str = "{}";
}
