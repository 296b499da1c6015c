//! Tool definitions: what a client sees and how it maps onto a command line.

use serde::{Deserialize, Serialize};

/// How a caller-supplied parameter turns into command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "flag", rename_all = "snake_case")]
pub enum ArgBinding {
    /// The value is appended as a bare argument.
    Positional,
    /// The value is appended after the given flag (`-g <value>`).
    Flag(String),
}

/// A parameter accepted by a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter key as sent by clients.
    pub name: String,
    /// JSON Schema type (always "string" for the Radius tools).
    #[serde(rename = "type")]
    pub arg_type: String,
    /// Human-readable description.
    pub description: String,
    /// Whether the call fails without this parameter.
    #[serde(default)]
    pub required: bool,
    /// Command-line mapping.
    pub binding: ArgBinding,
}

impl ToolParameter {
    /// Optional string parameter bound to `flag`.
    pub fn flag(name: &str, flag: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            arg_type: "string".to_string(),
            description: description.to_string(),
            required: false,
            binding: ArgBinding::Flag(flag.to_string()),
        }
    }

    /// Required string parameter appended positionally.
    pub fn positional(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            arg_type: "string".to_string(),
            description: description.to_string(),
            required: true,
            binding: ArgBinding::Positional,
        }
    }
}

/// Base program plus the fixed argument prefix of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandTemplate {
    /// Executable name or path.
    pub program: String,
    /// Arguments always passed before the derived ones.
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandTemplate {
    /// Creates a template from a program and its fixed prefix.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// A tool exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Accepted parameters, in binding order.
    #[serde(default)]
    pub parameters: Vec<ToolParameter>,
    /// Command invocation template.
    pub command: CommandTemplate,
}

impl ToolDefinition {
    /// Iterates over the parameters marked required.
    pub fn required_parameters(&self) -> impl Iterator<Item = &ToolParameter> {
        self.parameters.iter().filter(|p| p.required)
    }
}
