//! `radmcp serve` command.
//!
//! Starts the gateway over HTTP (POST and SSE) or stdio.

use std::sync::Arc;

use clap::Args;

use radmcp_config::GatewayConfig;
use radmcp_transport_http::HttpServer;
use radmcp_transport_stdio::{StdioServer, StdioTransport};

use crate::{output, shared};

/// Start the gateway.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Transport mode: http (default) or stdio.
    #[arg(long, default_value = "http", value_parser = ["http", "stdio"])]
    pub transport: String,
    /// Interface to bind (overrides config).
    #[arg(long)]
    pub host: Option<String>,
    /// TCP port for the HTTP transport (overrides config and PORT).
    #[arg(long)]
    pub port: Option<u16>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &GatewayConfig) -> anyhow::Result<()> {
    let handler = shared::build_handler(config);
    tracing::info!(tools = handler.registry().len(), "tool catalog ready");

    match args.transport.as_str() {
        "stdio" => {
            let mut server = StdioServer::new(StdioTransport::stdio(), handler);
            tokio::select! {
                result = server.run() => {
                    result.map_err(|e| output::report_failure("stdio transport", e))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
        _ => {
            let host = args.host.as_deref().unwrap_or(&config.server.host);
            let port = args.port.unwrap_or(config.server.port);
            let server = HttpServer::new(
                Arc::new(handler),
                host,
                port,
                config.server.keepalive(),
            );
            server
                .run(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = %e, "cannot listen for ctrl-c");
                        std::future::pending::<()>().await;
                    }
                    tracing::info!("shutdown signal received");
                })
                .await
                .map_err(|e| output::report_failure("http transport", e))?;
        }
    }

    Ok(())
}
