//! Unsolicited notifications pushed on the streaming transport.

use serde::{Deserialize, Serialize};

/// Status value sent once the catalog has been delivered.
pub const STATUS_READY: &str = "ready";

/// Payload of `toolsRegisteredNotification`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsRegisteredNotification {
    /// Registration status.
    pub status: String,
    /// Number of tools in the catalog.
    #[serde(rename = "toolCount", default)]
    pub tool_count: usize,
}

impl ToolsRegisteredNotification {
    /// The notification for a delivered catalog of `tool_count` tools.
    pub fn ready(tool_count: usize) -> Self {
        Self {
            status: STATUS_READY.to_string(),
            tool_count,
        }
    }
}
