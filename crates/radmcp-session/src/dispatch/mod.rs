//! Request dispatch functions.
//!
//! Each sub-module handles one request type as free functions,
//! keeping `SessionHandler` itself thin (struct + routing only).

pub(crate) mod initialize;
pub(crate) mod tool_call;
