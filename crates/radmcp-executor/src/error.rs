//! Executor error types.

use radmcp_types::{DiagnosticError, ErrorKind, GatewayError};
use thiserror::Error;

/// Errors from a single tool execution.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// No tool with that name in the registry.
    #[error("tool not found: {name}")]
    ToolNotFound { name: String },
    /// A mandatory parameter was absent or empty.
    #[error("missing required parameter '{parameter}' for tool {tool}")]
    MissingRequiredParameter { tool: String, parameter: String },
    /// The process could not be launched or exited non-zero.
    #[error("command execution failed: {command}: {reason}")]
    CommandExecutionFailed {
        command: String,
        reason: String,
        /// Combined stdout/stderr captured before the failure.
        output: String,
    },
}

impl ExecutorError {
    /// The captured process output, if any was produced.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::CommandExecutionFailed { output, .. } if !output.is_empty() => Some(output),
            _ => None,
        }
    }

    /// Message carried back to the client in a tool-call result.
    ///
    /// Includes the captured output for failed commands.
    pub fn client_message(&self) -> String {
        match self.output() {
            Some(output) => format!("{self} - {}", output.trim_end()),
            None => self.to_string(),
        }
    }
}

impl From<ExecutorError> for GatewayError {
    fn from(e: ExecutorError) -> Self {
        let kind = match &e {
            ExecutorError::ToolNotFound { .. } => ErrorKind::NotFound,
            ExecutorError::MissingRequiredParameter { .. } => ErrorKind::InvalidInput,
            ExecutorError::CommandExecutionFailed { .. } => ErrorKind::ExecutionFailed,
        };
        GatewayError::new(kind, e.client_message())
    }
}

impl DiagnosticError for ExecutorError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::ToolNotFound { name } => {
                Some(format!("No tool named '{name}' is registered in the catalog."))
            }
            Self::MissingRequiredParameter { parameter, .. } => {
                Some(format!("The tool cannot run without a non-empty '{parameter}'."))
            }
            Self::CommandExecutionFailed { .. } => {
                Some("The Radius CLI returned an error or could not be started.".into())
            }
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::ToolNotFound { .. } => Some("Run `radmcp tools` to see valid tool names.".into()),
            Self::MissingRequiredParameter { parameter, .. } => {
                Some(format!("Pass the parameter, e.g. `-p {parameter}=<value>`."))
            }
            Self::CommandExecutionFailed { .. } => Some(
                "Check that `rad` is installed and its workspace is configured \
                 (`rad workspace show`)."
                    .into(),
            ),
        }
    }
}
