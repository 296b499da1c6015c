//! HTTP transport for the gateway.
//! Serves `/mcp` and `/mcp2`: `POST` for request/response exchanges,
//! `GET` for a server-sent event stream.

mod error;
pub mod router;
pub mod server;
pub mod sse;

pub use error::HttpTransportError;
pub use router::{build_router, AppState};
pub use server::HttpServer;
