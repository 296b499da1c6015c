//! Server loop over a line transport.
//!
//! Every input line gets exactly one output line: the reply envelope,
//! or `{"error": "<reason>"}` when the line is not an acceptable
//! request.

use serde_json::json;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, error, info, warn};

use radmcp_session::SessionHandler;

use crate::error::TransportError;
use crate::transport::StdioTransport;

/// Feeds transport lines to a session handler.
pub struct StdioServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: SessionHandler,
}

impl<R, W> StdioServer<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: SessionHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs until the input reaches EOF.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` only when the stream itself fails;
    /// bad requests are answered and the loop continues.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("radmcp server starting on stdio");
        while let Some(line) = self.transport.read_line().await? {
            let out = match self.handler.handle_json(&line).await {
                Ok(envelope) => match envelope.to_json() {
                    Ok(json) => {
                        debug!(message_type = %envelope.message_type(), "sending reply");
                        json
                    }
                    Err(e) => {
                        error!(error = %e, "failed to serialize reply");
                        error_line(&e.to_string())
                    }
                },
                Err(e) => {
                    warn!(error = %e, "rejected request");
                    error_line(&e.to_string())
                }
            };
            self.transport.write_line(&out).await?;
        }
        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Consumes the server, returning its transport.
    pub fn into_transport(self) -> StdioTransport<R, W> {
        self.transport
    }
}

fn error_line(reason: &str) -> String {
    json!({ "error": reason }).to_string()
}
