//! Error types for the HTTP transport.

use radmcp_types::{DiagnosticError, ErrorKind, GatewayError};
use thiserror::Error;

/// Errors that can occur in the HTTP transport.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// Failed to bind to the TCP address.
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        /// The address string.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The server hit an I/O error while serving.
    #[error("server error: {0}")]
    Serve(String),
    /// The client cannot receive a server-sent event stream.
    #[error("streaming unsupported: client does not accept text/event-stream")]
    StreamingUnsupported,
}

impl From<HttpTransportError> for GatewayError {
    fn from(e: HttpTransportError) -> Self {
        let kind = match &e {
            HttpTransportError::StreamingUnsupported => ErrorKind::Unsupported,
            _ => ErrorKind::Internal,
        };
        GatewayError::new(kind, e.to_string())
    }
}

impl DiagnosticError for HttpTransportError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::Bind { .. } => Some("Another process may already be using this port.".into()),
            Self::StreamingUnsupported => {
                Some("Send 'Accept: text/event-stream' or use POST instead.".into())
            }
            Self::Serve(_) => None,
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::Bind { .. } => Some("Pick another port with --port or PORT.".into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_error_displays_address() {
        let err = HttpTransportError::Bind {
            addr: "127.0.0.1:8085".into(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert!(err.to_string().contains("127.0.0.1:8085"));
        assert!(err.fix().is_some());
    }

    #[test]
    fn streaming_unsupported_maps_to_unsupported() {
        let err: GatewayError = HttpTransportError::StreamingUnsupported.into();
        assert_eq!(err.kind, ErrorKind::Unsupported);
    }
}
