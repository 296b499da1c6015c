//! Tool execution: lookup → bind → spawn → wrap.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{error, info};

use radmcp_registry::ToolRegistry;

use crate::binding::bind_arguments;
use crate::error::ExecutorError;
use crate::output::ExecutionOutput;
use crate::runner::{CommandRunner, Invocation, ProcessRunner};

/// Runs registry tools as external commands.
///
/// Every call spawns exactly one process. Concurrent calls are
/// independent; nothing is serialized between them.
#[derive(Clone)]
pub struct CommandExecutor {
    registry: Arc<ToolRegistry>,
    runner: Arc<dyn CommandRunner>,
}

impl CommandExecutor {
    /// Creates an executor that spawns real processes.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self::with_runner(registry, Arc::new(ProcessRunner))
    }

    /// Creates an executor with a custom process runner.
    pub fn with_runner(registry: Arc<ToolRegistry>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { registry, runner }
    }

    /// The catalog this executor resolves names against.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Builds the invocation for a call without running it.
    ///
    /// # Errors
    ///
    /// Returns `ToolNotFound` or `MissingRequiredParameter`.
    pub fn prepare(
        &self,
        tool_name: &str,
        params: &Map<String, Value>,
    ) -> Result<Invocation, ExecutorError> {
        let tool = self
            .registry
            .find(tool_name)
            .ok_or_else(|| ExecutorError::ToolNotFound {
                name: tool_name.to_string(),
            })?;
        let args = bind_arguments(tool, params)?;
        Ok(Invocation {
            program: tool.command.program.clone(),
            args,
        })
    }

    /// Executes a tool and returns its captured output.
    ///
    /// # Errors
    ///
    /// Returns `ToolNotFound` or `MissingRequiredParameter` before any
    /// process is spawned, and `CommandExecutionFailed` when the process
    /// cannot start or exits non-zero.
    #[tracing::instrument(skip(self, params), fields(tool = %tool_name))]
    pub async fn execute(
        &self,
        tool_name: &str,
        params: &Map<String, Value>,
    ) -> Result<ExecutionOutput, ExecutorError> {
        let invocation = self.prepare(tool_name, params)?;
        info!(command = %invocation, "executing command");

        let output = self.runner.run(&invocation).await.map_err(|e| {
            error!(command = %invocation, error = %e, "failed to launch command");
            ExecutorError::CommandExecutionFailed {
                command: invocation.to_string(),
                reason: e.to_string(),
                output: String::new(),
            }
        })?;

        if !output.success {
            error!(command = %invocation, status = %output.status, "command failed");
            return Err(ExecutorError::CommandExecutionFailed {
                command: invocation.to_string(),
                reason: output.status,
                output: output.combined,
            });
        }

        Ok(ExecutionOutput::from_raw(output.combined))
    }
}
