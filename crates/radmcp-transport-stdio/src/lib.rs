//! # radmcp-transport-stdio
//!
//! Stdio transport adapter: one JSON envelope per line in, one reply
//! envelope per line out, driven by the same session handler as HTTP.

pub mod error;
pub mod server;
pub mod transport;

pub use error::TransportError;
pub use server::StdioServer;
pub use transport::StdioTransport;
