//! # radmcp-types
//!
//! Domain types for the Radius MCP gateway.
//! This crate contains pure data types with no dependencies beyond
//! serde for serialization.

pub mod error;
pub mod tool;

// Re-exports for convenience.
pub use error::{DiagnosticError, ErrorKind, GatewayError};
pub use tool::{ArgBinding, CommandTemplate, ToolDefinition, ToolParameter};
