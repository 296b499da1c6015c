//! Client-facing tool descriptors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use radmcp_types::ToolDefinition;

/// A tool as listed in `initializeResponse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// Accepted parameters; never omitted.
    #[serde(default)]
    pub parameters: ParameterSchema,
}

/// Object-shaped parameter schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// Always `"object"`.
    #[serde(rename = "type", default = "object_type")]
    pub schema_type: String,
    /// Parameter name → description; empty when the tool takes none.
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
    /// Names of mandatory parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Default for ParameterSchema {
    fn default() -> Self {
        Self {
            schema_type: object_type(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }
}

fn object_type() -> String {
    "object".to_string()
}

/// Schema of a single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON Schema type.
    #[serde(rename = "type")]
    pub prop_type: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

impl From<&ToolDefinition> for ToolDescriptor {
    fn from(def: &ToolDefinition) -> Self {
        let mut parameters = ParameterSchema::default();
        for p in &def.parameters {
            parameters.properties.insert(
                p.name.clone(),
                PropertySchema {
                    prop_type: p.arg_type.clone(),
                    description: p.description.clone(),
                },
            );
            if p.required {
                parameters.required.push(p.name.clone());
            }
        }
        Self {
            name: def.name.clone(),
            description: def.description.clone(),
            parameters,
        }
    }
}
