//! Parameter-to-argument binding.

use serde_json::{Map, Value};

use radmcp_types::{ArgBinding, ToolDefinition};

use crate::error::ExecutorError;

/// Builds the full argument list for a tool: the template prefix
/// followed by one entry (or flag pair) per present parameter.
///
/// Parameters are visited in declaration order. Keys the tool does not
/// declare are ignored.
///
/// # Errors
///
/// Returns `ExecutorError::MissingRequiredParameter` for the first
/// required parameter that is absent, `null` or an empty string.
pub fn bind_arguments(
    tool: &ToolDefinition,
    params: &Map<String, Value>,
) -> Result<Vec<String>, ExecutorError> {
    let mut args = tool.command.args.clone();

    for param in &tool.parameters {
        let value = params.get(&param.name).and_then(argument_text);
        match (value, &param.binding) {
            (Some(v), ArgBinding::Positional) => args.push(v),
            (Some(v), ArgBinding::Flag(flag)) => {
                args.push(flag.clone());
                args.push(v);
            }
            (None, _) if param.required => {
                return Err(ExecutorError::MissingRequiredParameter {
                    tool: tool.name.clone(),
                    parameter: param.name.clone(),
                });
            }
            (None, _) => {}
        }
    }

    Ok(args)
}

/// Command-line text for a parameter value; `None` means "absent".
fn argument_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
