//! # radmcp-session
//!
//! Session handler (APPLICATION layer).
//!
//! [`SessionHandler`] answers `initializeRequest` with the catalog and
//! runs `toolCallRequest` batches through the command executor.
//! [`session_events`] produces the event sequence of one streaming
//! connection. Transports own no protocol logic beyond framing.

mod dispatch;
pub mod error;
pub mod handler;
pub mod stream;

pub use error::SessionError;
pub use handler::SessionHandler;
pub use stream::{session_events, SessionEvent};
