//! `radmcp client` command.
//!
//! Protocol test client: initializes against a running gateway, lists
//! the catalog, then calls the version and list tools over HTTP POST.

use clap::Args;
use serde_json::{Map, Value};

use radmcp_config::GatewayConfig;
use radmcp_protocol::{
    Envelope, InitializeRequest, InitializeResponse, Message, ToolCall, ToolCallRequest,
    ToolCallResult,
};
use radmcp_registry::catalog::{LIST_TOOL, VERSION_TOOL};

use crate::output;

/// Exercise a running gateway.
#[derive(Debug, Args)]
pub struct ClientArgs {
    /// Gateway endpoint (defaults to `client.base_url`).
    #[arg(long)]
    pub url: Option<String>,
}

/// Minimal HTTP client for the envelope protocol.
pub struct GatewayClient {
    http: reqwest::Client,
    url: String,
}

impl GatewayClient {
    /// Creates a client posting to `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Sends `initializeRequest`.
    pub async fn initialize(&self) -> anyhow::Result<InitializeResponse> {
        let reply = self
            .send(Message::InitializeRequest(InitializeRequest::default()))
            .await?;
        match reply.body {
            Message::InitializeResponse(init) => Ok(init),
            other => anyhow::bail!("unexpected message type: {}", other.message_type()),
        }
    }

    /// Calls one tool and returns its result slot.
    pub async fn call_tool(
        &self,
        name: &str,
        parameters: Map<String, Value>,
    ) -> anyhow::Result<ToolCallResult> {
        let batch = ToolCallRequest {
            tool_calls: vec![ToolCall {
                tool_call_id: format!("call-{name}"),
                name: name.to_string(),
                parameters,
            }],
        };
        let reply = self.send(Message::ToolCallRequest(batch)).await?;
        match reply.body {
            Message::ToolCallResponse(resp) => resp
                .tool_call_responses
                .into_iter()
                .next()
                .ok_or_else(|| anyhow::anyhow!("empty toolCallResponse")),
            other => anyhow::bail!("unexpected message type: {}", other.message_type()),
        }
    }

    async fn send(&self, body: Message) -> anyhow::Result<Envelope> {
        let resp = self
            .http
            .post(&self.url)
            .json(&Envelope::new(body))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("error sending request: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("server returned {status} - {text}");
        }
        resp.json()
            .await
            .map_err(|e| anyhow::anyhow!("invalid reply envelope: {e}"))
    }
}

/// Executes the client command.
pub async fn execute(args: &ClientArgs, config: &GatewayConfig) -> anyhow::Result<()> {
    let url = args.url.as_deref().unwrap_or(&config.client.base_url);
    let client = GatewayClient::new(url);

    output::print_info(&format!("Connecting to {url}"));
    let init = client.initialize().await?;
    output::print_success(&format!(
        "protocol {} with {} tool(s)",
        init.protocol_version,
        init.tools.len()
    ));
    println!("Available tools:");
    for tool in &init.tools {
        println!("- {}: {}", tool.name, tool.description);
    }
    println!();

    for name in [VERSION_TOOL, LIST_TOOL] {
        match client.call_tool(name, Map::new()).await {
            Ok(result) => print_result(name, &result),
            Err(e) => output::print_error(&format!("calling {name}: {e}")),
        }
    }
    Ok(())
}

fn print_result(name: &str, result: &ToolCallResult) {
    println!("Results for {name}:");
    match (result.error(), result.results()) {
        (Some(error), _) => output::print_error(error),
        (None, Some(results)) => output::print_tool_output(&results.output, results.data.as_ref()),
        (None, None) => output::print_error("empty result"),
    }
    println!();
}
