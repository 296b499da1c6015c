//! `initializeRequest` / `initializeResponse` payloads.

use serde::{Deserialize, Serialize};

use crate::descriptor::ToolDescriptor;

/// Payload of `initializeRequest`. Carries nothing; extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeRequest {}

/// Identity of the answering server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

/// Payload of `initializeResponse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Protocol version spoken by the server.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Full tool catalog, in catalog order.
    pub tools: Vec<ToolDescriptor>,
    /// Server identity.
    #[serde(rename = "serverInfo", default, skip_serializing_if = "Option::is_none")]
    pub server_info: Option<ServerInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_accepts_extra_fields() {
        let r: InitializeRequest = serde_json::from_value(json!({"clientId": "x"})).expect("de");
        assert_eq!(r, InitializeRequest::default());
    }

    #[test]
    fn response_field_names() {
        let r = InitializeResponse {
            protocol_version: "0.1".into(),
            tools: vec![],
            server_info: Some(ServerInfo {
                name: "radmcp".into(),
                version: "0.1.0".into(),
            }),
        };
        let v = serde_json::to_value(&r).expect("ser");
        assert_eq!(v["protocolVersion"], "0.1");
        assert_eq!(v["serverInfo"]["name"], "radmcp");
        assert!(v["tools"].as_array().expect("arr").is_empty());
    }
}
