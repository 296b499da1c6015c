//! Shared helpers used across CLI commands.
//!
//! Centralises building the catalog and executor from configuration so
//! every command sees the same tools.

use std::sync::Arc;

use radmcp_config::GatewayConfig;
use radmcp_executor::CommandExecutor;
use radmcp_registry::{locate_rad, radius_catalog, ToolRegistry};
use radmcp_session::SessionHandler;

/// Locates `rad` and builds the tool catalog.
pub fn build_registry(config: &GatewayConfig) -> Arc<ToolRegistry> {
    let rad = locate_rad(config.radius.binary.as_deref());
    Arc::new(radius_catalog(&rad))
}

/// Builds an executor that spawns real processes.
pub fn build_executor(config: &GatewayConfig) -> CommandExecutor {
    CommandExecutor::new(build_registry(config))
}

/// Builds the session handler shared by every transport.
pub fn build_handler(config: &GatewayConfig) -> SessionHandler {
    SessionHandler::new(build_executor(config))
}
