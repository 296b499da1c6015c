//! `toolCallRequest` / `toolCallResponse` payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One requested invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Caller-chosen id echoed back in the result.
    #[serde(rename = "toolCallId")]
    pub tool_call_id: String,
    /// Tool name.
    pub name: String,
    /// Tool parameters; absent or `null` means none.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parameters: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload of `toolCallRequest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Calls to run, in order.
    #[serde(rename = "toolCalls")]
    pub tool_calls: Vec<ToolCall>,
}

/// Output of a successful call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResults {
    /// Raw command output.
    pub output: String,
    /// Parsed structured output, when the output was JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Either an error message or results, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolCallOutcome {
    /// The call failed.
    Failure {
        /// Failure description.
        error: String,
    },
    /// The call succeeded.
    Success {
        /// Captured output.
        results: ToolResults,
    },
}

/// Result slot for one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResult {
    /// Id from the matching [`ToolCall`].
    #[serde(rename = "toolCallId")]
    pub tool_call_id: String,
    /// What happened.
    #[serde(flatten)]
    pub outcome: ToolCallOutcome,
}

impl ToolCallResult {
    /// A successful result.
    pub fn success(tool_call_id: impl Into<String>, output: String, data: Option<Value>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            outcome: ToolCallOutcome::Success {
                results: ToolResults { output, data },
            },
        }
    }

    /// A failed result.
    pub fn failure(tool_call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            outcome: ToolCallOutcome::Failure {
                error: error.into(),
            },
        }
    }

    /// The error message, if the call failed.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ToolCallOutcome::Failure { error } => Some(error),
            ToolCallOutcome::Success { .. } => None,
        }
    }

    /// The results, if the call succeeded.
    pub fn results(&self) -> Option<&ToolResults> {
        match &self.outcome {
            ToolCallOutcome::Success { results } => Some(results),
            ToolCallOutcome::Failure { .. } => None,
        }
    }
}

/// Payload of `toolCallResponse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResponse {
    /// One result per requested call, in request order.
    #[serde(rename = "toolCallResponses")]
    pub tool_call_responses: Vec<ToolCallResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_parameters_default_to_empty() {
        let c: ToolCall =
            serde_json::from_value(json!({"toolCallId": "1", "name": "radius_version"}))
                .expect("de");
        assert!(c.parameters.is_empty());
        let c: ToolCall = serde_json::from_value(
            json!({"toolCallId": "1", "name": "radius_version", "parameters": null}),
        )
        .expect("de");
        assert!(c.parameters.is_empty());
    }

    #[test]
    fn call_missing_id_is_rejected() {
        assert!(serde_json::from_value::<ToolCall>(json!({"name": "radius_version"})).is_err());
    }

    #[test]
    fn request_requires_list() {
        assert!(serde_json::from_value::<ToolCallRequest>(json!({"toolCalls": {}})).is_err());
        assert!(serde_json::from_value::<ToolCallRequest>(json!({})).is_err());
    }

    #[test]
    fn failure_has_no_results_field() {
        let r = ToolCallResult::failure("call-1", "tool not found: x");
        let v = serde_json::to_value(&r).expect("ser");
        assert_eq!(v, json!({"toolCallId": "call-1", "error": "tool not found: x"}));
    }

    #[test]
    fn success_omits_absent_data() {
        let r = ToolCallResult::success("call-1", "v0.40.0\n".into(), None);
        let v = serde_json::to_value(&r).expect("ser");
        assert_eq!(v, json!({"toolCallId": "call-1", "results": {"output": "v0.40.0\n"}}));
    }

    #[test]
    fn result_decodes_both_shapes() {
        let ok: ToolCallResult = serde_json::from_value(
            json!({"toolCallId": "a", "results": {"output": "[]", "data": []}}),
        )
        .expect("de");
        assert_eq!(ok.results().and_then(|r| r.data.clone()), Some(json!([])));
        let err: ToolCallResult =
            serde_json::from_value(json!({"toolCallId": "b", "error": "boom"})).expect("de");
        assert_eq!(err.error(), Some("boom"));
    }
}
