//! `radmcp call` command.
//!
//! Runs a single catalog tool through the executor, with no server
//! involved.

use clap::Args;

use radmcp_config::GatewayConfig;

use crate::{input, output, shared};

/// Run one tool locally.
#[derive(Debug, Args)]
pub struct CallArgs {
    /// Tool name, e.g. `radius_version`.
    pub tool: String,
    /// Tool parameter as key=value (repeatable).
    #[arg(short = 'p', long = "param", value_parser = input::parse_param)]
    pub params: Vec<(String, String)>,
}

/// Executes the call command.
pub async fn execute(args: &CallArgs, config: &GatewayConfig) -> anyhow::Result<()> {
    let executor = shared::build_executor(config);
    let params = input::to_parameters(&args.params);

    match executor.execute(&args.tool, &params).await {
        Ok(result) => {
            output::print_success(&format!("{} finished", args.tool));
            output::print_tool_output(&result.output, result.data.as_ref());
            Ok(())
        }
        Err(e) => Err(output::report_failure(&format!("tool {}", args.tool), e)),
    }
}
