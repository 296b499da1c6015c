//! The message envelope and inbound request decoding.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProtocolError;
use crate::messages::{
    InitializeRequest, InitializeResponse, ToolCallRequest, ToolCallResponse,
    ToolsRegisteredNotification,
};
use crate::PROTOCOL_VERSION;

/// Every message type the protocol defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageType {
    InitializeRequest,
    InitializeResponse,
    ToolCallRequest,
    ToolCallResponse,
    ToolsRegisteredNotification,
}

impl MessageType {
    /// Wire name, also used as the SSE event name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InitializeRequest => "initializeRequest",
            Self::InitializeResponse => "initializeResponse",
            Self::ToolCallRequest => "toolCallRequest",
            Self::ToolCallResponse => "toolCallResponse",
            Self::ToolsRegisteredNotification => "toolsRegisteredNotification",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed payload, tagged by `messageType` with the body under `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "messageType", content = "message", rename_all = "camelCase")]
pub enum Message {
    InitializeRequest(InitializeRequest),
    InitializeResponse(InitializeResponse),
    ToolCallRequest(ToolCallRequest),
    ToolCallResponse(ToolCallResponse),
    ToolsRegisteredNotification(ToolsRegisteredNotification),
}

impl Message {
    /// The tag this payload is sent under.
    pub const fn message_type(&self) -> MessageType {
        match self {
            Self::InitializeRequest(_) => MessageType::InitializeRequest,
            Self::InitializeResponse(_) => MessageType::InitializeResponse,
            Self::ToolCallRequest(_) => MessageType::ToolCallRequest,
            Self::ToolCallResponse(_) => MessageType::ToolCallResponse,
            Self::ToolsRegisteredNotification(_) => MessageType::ToolsRegisteredNotification,
        }
    }
}

/// `{ version, messageType, message }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Protocol version string.
    pub version: String,
    /// Tagged payload.
    #[serde(flatten)]
    pub body: Message,
}

impl Envelope {
    /// Wraps a payload with the current protocol version.
    pub fn new(body: Message) -> Self {
        Self {
            version: PROTOCOL_VERSION.to_string(),
            body,
        }
    }

    /// The payload's message type.
    pub fn message_type(&self) -> MessageType {
        self.body.message_type()
    }

    /// Serializes to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns the serde error if a payload value cannot be encoded.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Loosely-typed envelope as received, before payload validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEnvelope {
    /// Version claimed by the sender.
    #[serde(default)]
    pub version: Option<String>,
    /// Message type as sent.
    #[serde(rename = "messageType")]
    pub message_type: String,
    /// Unvalidated payload.
    #[serde(default)]
    pub message: Value,
}

/// A request the server knows how to answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Catalog request.
    Initialize(InitializeRequest),
    /// Batch of tool calls.
    ToolCall(ToolCallRequest),
}

/// A decoded inbound request plus the version it was sent with.
#[derive(Debug, Clone, PartialEq)]
pub struct Inbound {
    /// Version claimed by the sender.
    pub version: Option<String>,
    /// Validated request.
    pub request: Request,
}

impl Inbound {
    /// Decodes a request from raw text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidJson` if `text` is not JSON, otherwise see
    /// [`Inbound::from_value`].
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ProtocolError::InvalidJson(e.to_string()))?;
        Self::from_value(value)
    }

    /// Decodes a request from parsed JSON.
    ///
    /// # Errors
    ///
    /// - `MalformedEnvelope` if the value is not an envelope object.
    /// - `UnsupportedMessageType` for anything but `initializeRequest`
    ///   and `toolCallRequest`.
    /// - `MalformedPayload` if a tool-call batch is not a list of calls
    ///   each carrying `toolCallId` and `name`.
    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        let raw: RawEnvelope = serde_json::from_value(value)
            .map_err(|e| ProtocolError::MalformedEnvelope(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Validates the payload of an already-split envelope.
    ///
    /// # Errors
    ///
    /// Same as [`Inbound::from_value`] minus the envelope check.
    pub fn from_raw(raw: RawEnvelope) -> Result<Self, ProtocolError> {
        let request = match raw.message_type.as_str() {
            t if t == MessageType::InitializeRequest.as_str() => {
                Request::Initialize(InitializeRequest::default())
            }
            t if t == MessageType::ToolCallRequest.as_str() => {
                let batch: ToolCallRequest = serde_json::from_value(raw.message).map_err(|e| {
                    ProtocolError::MalformedPayload {
                        message_type: raw.message_type.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Request::ToolCall(batch)
            }
            other => return Err(ProtocolError::UnsupportedMessageType(other.to_string())),
        };
        Ok(Self {
            version: raw.version,
            request,
        })
    }

    /// True when the sender claimed the version this server speaks.
    pub fn version_matches(&self) -> bool {
        self.version.as_deref() == Some(PROTOCOL_VERSION)
    }
}
