//! `tools/list` and `tools/call`.

use serde_json::Value;

use kiosk_protocol::mcp::{McpToolDefinition, ToolsCallParams, ToolsCallResult, ToolsListResult};
use kiosk_protocol::{error_codes, input_schema, RequestId};
use kiosk_types::OperationKind;

use super::{error, parse_params, success};
use crate::dispatcher::{Dispatcher, OperationRequest};
use crate::handler::JsonRpcOutput;
use crate::registry::Registry;

/// Lists every registered tool in registration order.
pub(crate) fn handle_tools_list(id: RequestId, registry: &Registry) -> JsonRpcOutput {
    let tools = registry
        .iter_kind(OperationKind::Tool)
        .map(|d| McpToolDefinition {
            name: d.name.clone(),
            description: Some(d.description.clone()),
            input_schema: input_schema(&d.schema),
        })
        .collect();
    success(id, &ToolsListResult { tools })
}

/// Calls a tool. Every dispatcher failure is reported in-band as
/// `isError: true`; only a malformed params shape is a JSON-RPC error.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    dispatcher: &Dispatcher,
) -> JsonRpcOutput {
    // 1. Parse params
    let call: ToolsCallParams = match parse_params(&id, params, "tools/call") {
        Ok(c) => c,
        Err(out) => return out,
    };

    // 2. Dispatch
    let request = OperationRequest::new(OperationKind::Tool, call.name, call.arguments);
    let envelope = dispatcher.handle(&request).await;

    // 3. Wrap
    match envelope.content() {
        Some(content) => success(
            id,
            &ToolsCallResult {
                content,
                is_error: !envelope.is_success(),
            },
        ),
        None => error(
            id,
            error_codes::INTERNAL_ERROR,
            format!("tool '{}' returned a non-content result", request.name),
        ),
    }
}
