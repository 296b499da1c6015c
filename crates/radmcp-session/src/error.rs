//! Request-level session errors.

use radmcp_protocol::ProtocolError;
use radmcp_types::{ErrorKind, GatewayError};
use thiserror::Error;

/// Errors that abort a single exchange.
///
/// Per-call tool failures are never reported here; they travel inside
/// the `toolCallResponse`.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Bad JSON, an unsupported message type, or a malformed batch.
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] ProtocolError),
}

impl From<SessionError> for GatewayError {
    fn from(e: SessionError) -> Self {
        GatewayError::new(ErrorKind::InvalidInput, e.to_string())
    }
}
