//! Session handler: routes decoded requests to dispatch functions.

use serde_json::Value;
use tracing::{debug, warn};

use radmcp_executor::CommandExecutor;
use radmcp_protocol::{
    Envelope, Inbound, InitializeResponse, Message, Request, ServerInfo, ToolCallRequest,
    ToolCallResponse, ToolsRegisteredNotification,
};
use radmcp_registry::ToolRegistry;

use crate::dispatch::{initialize, tool_call};
use crate::error::SessionError;

/// Answers protocol requests. Holds no per-client state; one instance
/// is shared by every request and connection.
#[derive(Clone)]
pub struct SessionHandler {
    executor: CommandExecutor,
    server_info: ServerInfo,
}

impl SessionHandler {
    /// Creates a handler over an executor and its catalog.
    pub fn new(executor: CommandExecutor) -> Self {
        Self {
            executor,
            server_info: ServerInfo {
                name: "radmcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// The catalog served by this handler.
    pub fn registry(&self) -> &ToolRegistry {
        self.executor.registry()
    }

    /// The `initializeResponse` payload.
    pub fn initialize(&self) -> InitializeResponse {
        initialize::handle_initialize(self.registry(), &self.server_info)
    }

    /// Runs a tool-call batch. Never fails as a whole.
    pub async fn call_tools(&self, batch: ToolCallRequest) -> ToolCallResponse {
        tool_call::handle_tool_calls(&self.executor, batch).await
    }

    /// Answers a decoded request with exactly one envelope.
    pub async fn handle(&self, inbound: Inbound) -> Envelope {
        if !inbound.version_matches() {
            warn!(version = ?inbound.version, "request carries an unexpected protocol version");
        }
        let body = match inbound.request {
            Request::Initialize(_) => {
                debug!("received initializeRequest");
                Message::InitializeResponse(self.initialize())
            }
            Request::ToolCall(batch) => {
                debug!(calls = batch.tool_calls.len(), "received toolCallRequest");
                Message::ToolCallResponse(self.call_tools(batch).await)
            }
        };
        Envelope::new(body)
    }

    /// Decodes and answers a parsed JSON envelope.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MalformedRequest` if the value is not an
    /// acceptable request; nothing is executed in that case.
    pub async fn handle_value(&self, value: Value) -> Result<Envelope, SessionError> {
        let inbound = Inbound::from_value(value)?;
        Ok(self.handle(inbound).await)
    }

    /// Decodes and answers raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MalformedRequest` for invalid JSON or any
    /// error listed on [`SessionHandler::handle_value`].
    pub async fn handle_json(&self, text: &str) -> Result<Envelope, SessionError> {
        let inbound = Inbound::from_json(text)?;
        Ok(self.handle(inbound).await)
    }

    /// The two envelopes pushed when a streaming session opens:
    /// the initialization response, then the tools-registered notice.
    pub fn handshake(&self) -> [Envelope; 2] {
        let init = self.initialize();
        let ready = ToolsRegisteredNotification::ready(init.tools.len());
        [
            Envelope::new(Message::InitializeResponse(init)),
            Envelope::new(Message::ToolsRegisteredNotification(ready)),
        ]
    }
}
