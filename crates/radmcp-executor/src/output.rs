//! Captured command output and opportunistic JSON parsing.

use serde::Serialize;
use serde_json::Value;

/// Successful execution result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionOutput {
    /// Raw combined output text.
    pub output: String,
    /// Parsed structured data, when the output was JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ExecutionOutput {
    /// Wraps raw output, attaching parsed data when possible.
    pub fn from_raw(output: String) -> Self {
        let data = parse_structured(&output);
        Self { output, data }
    }
}

/// Parses `text` as JSON if, once trimmed, it starts with `{` or `[`.
///
/// Anything that does not parse yields `None`; that is not an error.
pub fn parse_structured(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}
