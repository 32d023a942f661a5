//! `initialize` and `ping`.

use serde_json::{json, Value};

use kiosk_protocol::mcp::{
    Capability, Implementation, InitializeParams, InitializeResult, ServerCapabilities,
    PROTOCOL_VERSION,
};
use kiosk_protocol::{error_codes, RequestId};

use super::{error, success};
use crate::handler::JsonRpcOutput;

/// Answers `initialize` with the server capabilities. Params are
/// optional but must be well-formed when present.
pub(crate) fn handle_initialize(
    id: RequestId,
    params: &Option<Value>,
    server_info: &Implementation,
) -> JsonRpcOutput {
    if let Some(p) = params {
        match serde_json::from_value::<InitializeParams>(p.clone()) {
            Ok(init) => tracing::info!(
                client = %init.client_info.name,
                client_version = %init.client_info.version,
                protocol = %init.protocol_version,
                "client connected"
            ),
            Err(e) => {
                return error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid initialize params: {e}"),
                );
            }
        }
    }

    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(Capability {}),
            resources: Some(Capability {}),
            prompts: Some(Capability {}),
        },
        server_info: server_info.clone(),
    };
    success(id, &result)
}

/// Answers `ping` with an empty object.
pub(crate) fn handle_ping(id: RequestId) -> JsonRpcOutput {
    success(id, &json!({}))
}
