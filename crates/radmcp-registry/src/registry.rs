//! Read-only tool registry.

use radmcp_types::ToolDefinition;

/// Ordered, immutable set of tool definitions.
///
/// Order is the order tools are presented to clients and never changes
/// for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Builds a registry from definitions in presentation order.
    ///
    /// A later definition with an already-seen name is dropped.
    pub fn new(definitions: Vec<ToolDefinition>) -> Self {
        let mut tools: Vec<ToolDefinition> = Vec::with_capacity(definitions.len());
        for def in definitions {
            if tools.iter().any(|t| t.name == def.name) {
                tracing::warn!(tool = %def.name, "duplicate tool name ignored");
                continue;
            }
            tools.push(def);
        }
        Self { tools }
    }

    /// All tools, in catalog order.
    pub fn list(&self) -> &[ToolDefinition] {
        &self.tools
    }

    /// Looks a tool up by exact name.
    pub fn find(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True when the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
