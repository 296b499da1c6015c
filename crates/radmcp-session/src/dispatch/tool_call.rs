//! Handles `toolCallRequest`.

use radmcp_executor::CommandExecutor;
use radmcp_protocol::{ToolCallRequest, ToolCallResponse, ToolCallResult};

/// Runs every call of a batch in order and collects one result per call.
///
/// A failing call is recorded as an error result and the batch carries on.
pub(crate) async fn handle_tool_calls(
    executor: &CommandExecutor,
    batch: ToolCallRequest,
) -> ToolCallResponse {
    let mut results = Vec::with_capacity(batch.tool_calls.len());

    for call in batch.tool_calls {
        tracing::debug!(id = %call.tool_call_id, tool = %call.name, "dispatching tool call");
        let result = match executor.execute(&call.name, &call.parameters).await {
            Ok(out) => ToolCallResult::success(call.tool_call_id, out.output, out.data),
            Err(e) => {
                tracing::warn!(
                    id = %call.tool_call_id,
                    tool = %call.name,
                    error = %e,
                    "tool call failed"
                );
                ToolCallResult::failure(call.tool_call_id, e.client_message())
            }
        };
        results.push(result);
    }

    ToolCallResponse {
        tool_call_responses: results,
    }
}
