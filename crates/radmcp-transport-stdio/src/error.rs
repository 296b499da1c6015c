//! Transport-layer error types.

use radmcp_types::{DiagnosticError, ErrorKind, GatewayError};
use thiserror::Error;

/// Errors from the stdio transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from the input stream.
    #[error("read error: {0}")]
    Read(String),
    /// Failed to write to the output stream.
    #[error("write error: {0}")]
    Write(String),
}

impl From<TransportError> for GatewayError {
    fn from(e: TransportError) -> Self {
        GatewayError::new(ErrorKind::Internal, e.to_string())
    }
}

impl DiagnosticError for TransportError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::Read(_) => Some("Standard input could not be read.".into()),
            Self::Write(_) => Some("The peer closed standard output.".into()),
        }
    }
}
