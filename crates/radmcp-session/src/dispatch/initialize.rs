//! Handles `initializeRequest`.

use radmcp_protocol::{InitializeResponse, ServerInfo, ToolDescriptor, PROTOCOL_VERSION};
use radmcp_registry::ToolRegistry;

/// Builds the `initializeResponse` payload for the whole catalog.
pub(crate) fn handle_initialize(
    registry: &ToolRegistry,
    server_info: &ServerInfo,
) -> InitializeResponse {
    InitializeResponse {
        protocol_version: PROTOCOL_VERSION.to_string(),
        tools: registry.list().iter().map(ToolDescriptor::from).collect(),
        server_info: Some(server_info.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radmcp_registry::{radius_catalog, RadBinary};

    fn info() -> ServerInfo {
        ServerInfo {
            name: "radmcp".into(),
            version: "0.1.0".into(),
        }
    }

    #[test]
    fn lists_catalog_in_order() {
        let reg = radius_catalog(&RadBinary::missing());
        let resp = handle_initialize(&reg, &info());
        let names: Vec<&str> = resp.tools.iter().map(|t| t.name.as_str()).collect();
        let expected: Vec<&str> = reg.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, expected);
        assert_eq!(resp.protocol_version, PROTOCOL_VERSION);
    }

    #[test]
    fn empty_registry_gives_empty_list() {
        let resp = handle_initialize(&ToolRegistry::default(), &info());
        assert!(resp.tools.is_empty());
    }
}
