//! Property-based tests for envelope decoding and descriptor encoding.
//!
//! The decoder must never panic on arbitrary input, and descriptors
//! must always carry an object-shaped `parameters` block.

use proptest::prelude::*;
use serde_json::json;

use radmcp_protocol::{Inbound, ProtocolError, Request, ToolDescriptor};
use radmcp_types::{CommandTemplate, ToolDefinition};

proptest! {
    /// Arbitrary strings never cause a panic.
    #[test]
    fn no_panic_on_arbitrary_text(input in "\\PC{0,256}") {
        let _ = Inbound::from_json(&input);
    }

    /// Unknown message types are rejected as unsupported, never accepted.
    #[test]
    fn unknown_message_types_rejected(message_type in "[a-zA-Z]{1,24}") {
        prop_assume!(message_type != "initializeRequest" && message_type != "toolCallRequest");
        let result = Inbound::from_value(json!({
            "version": "0.1",
            "messageType": message_type,
            "message": {},
        }));
        prop_assert!(matches!(result, Err(ProtocolError::UnsupportedMessageType(_))));
    }

    /// Batches keep their length and id order through decoding.
    #[test]
    fn batch_order_preserved(ids in proptest::collection::vec("[a-z0-9-]{1,12}", 0..16)) {
        let calls: Vec<_> = ids
            .iter()
            .map(|id| json!({"toolCallId": id, "name": "radius_version", "parameters": {}}))
            .collect();
        let inbound = Inbound::from_value(json!({
            "version": "0.1",
            "messageType": "toolCallRequest",
            "message": {"toolCalls": calls},
        }));
        prop_assert!(inbound.is_ok());
        let Request::ToolCall(batch) = inbound.expect("test: already checked").request else {
            return Err(TestCaseError::fail("expected a tool call batch"));
        };
        let decoded: Vec<String> = batch.tool_calls.into_iter().map(|c| c.tool_call_id).collect();
        prop_assert_eq!(decoded, ids);
    }

    /// A tool without parameters encodes and decodes with `properties == {}`.
    #[test]
    fn parameterless_descriptor_roundtrip(name in "[a-z_]{1,32}", description in "\\PC{0,64}") {
        let def = ToolDefinition {
            name,
            description,
            parameters: vec![],
            command: CommandTemplate::new("rad", &["version"]),
        };
        let encoded = serde_json::to_string(&ToolDescriptor::from(&def)).expect("test: serialize");
        let value: serde_json::Value = serde_json::from_str(&encoded).expect("test: parse");
        prop_assert_eq!(&value["parameters"]["type"], "object");
        prop_assert_eq!(&value["parameters"]["properties"], &json!({}));

        let back: ToolDescriptor = serde_json::from_str(&encoded).expect("test: deserialize");
        prop_assert!(back.parameters.properties.is_empty());
        prop_assert_eq!(back.name, def.name);
    }
}
