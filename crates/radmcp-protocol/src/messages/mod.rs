//! Payload types, one module per message family.

pub mod initialize;
pub mod notification;
pub mod tool_call;

pub use initialize::{InitializeRequest, InitializeResponse, ServerInfo};
pub use notification::ToolsRegisteredNotification;
pub use tool_call::{
    ToolCall, ToolCallOutcome, ToolCallRequest, ToolCallResponse, ToolCallResult, ToolResults,
};
