//! MCP tools/* method types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::content::Content;

/// A single tool definition in the MCP response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpToolDefinition {
    /// Tool name.
    pub name: String,
    /// Tool description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for input parameters.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Response for `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsListResult {
    /// Available tools.
    pub tools: Vec<McpToolDefinition>,
}

/// Request params for `tools/call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCallParams {
    /// Name of the tool to invoke.
    pub name: String,
    /// Raw, unvalidated arguments.
    #[serde(default)]
    pub arguments: Value,
}

/// Response for `tools/call`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCallResult {
    /// Content items returned by the tool.
    pub content: Vec<Content>,
    /// Whether the tool call resulted in an error.
    #[serde(default, rename = "isError")]
    pub is_error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_definition_uses_input_schema_key() {
        let def = McpToolDefinition {
            name: "greeting".into(),
            description: Some("Say hello".into()),
            input_schema: json!({"type": "object"}),
        };
        let s = serde_json::to_string(&def).expect("ser");
        assert!(s.contains("inputSchema"));
    }

    #[test]
    fn tools_call_params_default_arguments_to_null() {
        let p: ToolsCallParams = serde_json::from_str(r#"{"name":"time"}"#).expect("de");
        assert_eq!(p.name, "time");
        assert!(p.arguments.is_null());
    }

    #[test]
    fn tools_call_result_error_flag_is_camel_case() {
        let r = ToolsCallResult {
            content: vec![Content::text("cannot divide by zero")],
            is_error: true,
        };
        let v = serde_json::to_value(&r).expect("ser");
        assert_eq!(v["isError"], true);
        assert_eq!(v["content"][0]["text"], "cannot divide by zero");
    }
}
