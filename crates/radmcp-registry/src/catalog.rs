//! Built-in Radius tool catalog.

use radmcp_types::{CommandTemplate, ToolDefinition, ToolParameter};

use crate::locate::RadBinary;
use crate::registry::ToolRegistry;

/// Name of the version-query tool.
pub const VERSION_TOOL: &str = "radius_version";
/// Name of the application-listing tool.
pub const LIST_TOOL: &str = "radius_list_applications";
/// Name of the application-details tool.
pub const SHOW_TOOL: &str = "radius_show_application";
/// Name of the deploy tool.
pub const DEPLOY_TOOL: &str = "radius_deploy_application";

const UNAVAILABLE_SUFFIX: &str = " (UNAVAILABLE: 'rad' command not found)";

/// Builds the Radius catalog against a resolved `rad` binary.
///
/// When the binary was not found the tools are still listed, with a
/// description suffix telling clients why calls will fail.
pub fn radius_catalog(rad: &RadBinary) -> ToolRegistry {
    let program = rad.program();
    let describe = |text: &str| {
        if rad.available {
            text.to_string()
        } else {
            format!("{text}{UNAVAILABLE_SUFFIX}")
        }
    };

    ToolRegistry::new(vec![
        ToolDefinition {
            name: VERSION_TOOL.to_string(),
            description: describe("Get the Radius CLI version"),
            parameters: vec![],
            command: CommandTemplate::new(program, &["version"]),
        },
        ToolDefinition {
            name: LIST_TOOL.to_string(),
            description: describe("List all Radius applications"),
            parameters: vec![
                ToolParameter::flag("group", "-g", "Radius resource group"),
                ToolParameter::flag("environment", "-e", "Radius environment"),
                ToolParameter::flag("output", "-o", "Output format (json, table)"),
            ],
            command: CommandTemplate::new(program, &["app", "list"]),
        },
        ToolDefinition {
            name: SHOW_TOOL.to_string(),
            description: describe("Get details of a Radius application"),
            parameters: vec![
                ToolParameter::positional("name", "Application name"),
                ToolParameter::flag("group", "-g", "Radius resource group"),
                ToolParameter::flag("output", "-o", "Output format (json, table)"),
            ],
            command: CommandTemplate::new(program, &["app", "show"]),
        },
        ToolDefinition {
            name: DEPLOY_TOOL.to_string(),
            description: describe("Deploy a Radius application"),
            parameters: vec![
                ToolParameter::positional("file", "Path to the Bicep file"),
                ToolParameter::flag("application", "-a", "Application name"),
                ToolParameter::flag("environment", "-e", "Radius environment"),
                ToolParameter::flag("group", "-g", "Radius resource group"),
            ],
            command: CommandTemplate::new(program, &["deploy"]),
        },
    ])
}
