//! `radmcp tools` command.

use clap::Args;

use radmcp_config::GatewayConfig;
use radmcp_protocol::ToolDescriptor;

use crate::shared;

/// Print the tool catalog.
#[derive(Debug, Args)]
pub struct ToolsArgs {
    /// Print descriptors as JSON, as sent in `initializeResponse`.
    #[arg(long)]
    pub json: bool,
}

/// Executes the tools command.
pub fn execute(args: &ToolsArgs, config: &GatewayConfig) -> anyhow::Result<()> {
    let registry = shared::build_registry(config);
    let descriptors: Vec<ToolDescriptor> =
        registry.list().iter().map(ToolDescriptor::from).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    println!("Available tools:");
    for tool in &descriptors {
        println!("- {}: {}", tool.name, tool.description);
        for (name, prop) in &tool.parameters.properties {
            let required = if tool.parameters.required.contains(name) {
                " (required)"
            } else {
                ""
            };
            println!("    {name}{required}: {}", prop.description);
        }
    }
    Ok(())
}
