//! MCP resources/* method types.

use serde::{Deserialize, Serialize};

/// Request params for `resources/read`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesReadParams {
    /// URI of the resource to read.
    pub uri: String,
}

/// A resource definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResourceDefinition {
    /// Resource URI.
    pub uri: String,
    /// Resource name.
    pub name: String,
    /// Resource description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// MIME type.
    #[serde(
        default,
        rename = "mimeType",
        skip_serializing_if = "Option::is_none"
    )]
    pub mime_type: Option<String>,
}

/// Response for `resources/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesListResult {
    /// Available resources.
    pub resources: Vec<McpResourceDefinition>,
}

/// Textual body of a read resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceContents {
    /// URI the contents were read from.
    pub uri: String,
    /// MIME type of `text`.
    #[serde(
        default,
        rename = "mimeType",
        skip_serializing_if = "Option::is_none"
    )]
    pub mime_type: Option<String>,
    /// The resource body.
    pub text: String,
}

/// Response for `resources/read`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesReadResult {
    /// One entry per returned body.
    pub contents: Vec<ResourceContents>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_definition_uses_mime_type_key() {
        let def = McpResourceDefinition {
            uri: "server://info".into(),
            name: "server-info".into(),
            description: Some("Server information".into()),
            mime_type: Some("application/json".into()),
        };
        let s = serde_json::to_string(&def).expect("ser");
        assert!(s.contains("\"mimeType\":\"application/json\""));
    }

    #[test]
    fn resource_definition_optional_fields_skipped() {
        let def = McpResourceDefinition {
            uri: "x".into(),
            name: "r".into(),
            description: None,
            mime_type: None,
        };
        let s = serde_json::to_string(&def).expect("ser");
        assert!(!s.contains("description"));
        assert!(!s.contains("mimeType"));
    }

    #[test]
    fn read_result_shape() {
        let r = ResourcesReadResult {
            contents: vec![ResourceContents {
                uri: "server://info".into(),
                mime_type: Some("application/json".into()),
                text: "{}".into(),
            }],
        };
        let v = serde_json::to_value(&r).expect("ser");
        assert_eq!(v["contents"][0]["uri"], "server://info");
        assert_eq!(v["contents"][0]["text"], "{}");
    }
}
