//! Shared fixtures for session tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use radmcp_executor::{CommandExecutor, CommandOutput, CommandRunner, Invocation};
use radmcp_registry::{radius_catalog, RadBinary};
use radmcp_session::SessionHandler;

/// Answers every invocation with its own command line, or fails when
/// the command line contains `fail`. Command lines ending in `-o json`
/// are answered with a JSON object instead.
#[derive(Default)]
pub struct EchoRunner {
    pub calls: Mutex<Vec<String>>,
}

#[async_trait]
impl CommandRunner for EchoRunner {
    async fn run(&self, invocation: &Invocation) -> std::io::Result<CommandOutput> {
        let line = invocation.to_string();
        self.calls.lock().expect("lock").push(line.clone());
        let success = !line.contains("fail");
        Ok(CommandOutput {
            success,
            status: if success { "exit status: 0" } else { "exit status: 1" }.to_string(),
            combined: if line.ends_with("-o json") {
                format!("{{\"command\": \"{line}\"}}\n")
            } else {
                format!("{line}\n")
            },
        })
    }
}

pub fn handler_with(runner: Arc<EchoRunner>) -> SessionHandler {
    let rad = RadBinary {
        path: "rad".into(),
        available: true,
    };
    SessionHandler::new(CommandExecutor::with_runner(
        Arc::new(radius_catalog(&rad)),
        runner,
    ))
}
