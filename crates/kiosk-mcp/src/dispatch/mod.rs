//! MCP method implementations.
//!
//! Each sub-module handles one family of methods as free functions,
//! keeping `McpHandler` itself routing only.

pub(crate) mod initialize;
pub(crate) mod prompts;
pub(crate) mod resources;
pub(crate) mod tools;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use kiosk_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::error::CallFailure;
use crate::handler::JsonRpcOutput;

/// Parses required `params` into `T`, or builds the `-32602` reply.
pub(crate) fn parse_params<T: DeserializeOwned>(
    id: &RequestId,
    params: &Option<Value>,
    method: &str,
) -> Result<T, JsonRpcOutput> {
    let Some(p) = params else {
        return Err(error(
            id.clone(),
            error_codes::INVALID_PARAMS,
            format!("{method} requires params"),
        ));
    };
    serde_json::from_value(p.clone()).map_err(|e| {
        error(
            id.clone(),
            error_codes::INVALID_PARAMS,
            format!("invalid {method} params: {e}"),
        )
    })
}

/// Serializes `result` into a success reply.
pub(crate) fn success<T: Serialize>(id: RequestId, result: &T) -> JsonRpcOutput {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => error(id, error_codes::INTERNAL_ERROR, e.to_string()),
    }
}

pub(crate) fn error(id: RequestId, code: i32, message: impl Into<String>) -> JsonRpcOutput {
    JsonRpcOutput::Error(JsonRpcErrorResponse::error(id, code, message))
}

/// Carries a resource or prompt failure as a JSON-RPC error, since those
/// result types have no `isError` flag.
pub(crate) fn failure_reply(id: RequestId, failure: &CallFailure) -> JsonRpcOutput {
    let code = match failure {
        CallFailure::UnknownOperation { .. } | CallFailure::Validation(_) => {
            error_codes::INVALID_PARAMS
        }
        CallFailure::Domain { .. } | CallFailure::External { .. } | CallFailure::Internal { .. } => {
            error_codes::INTERNAL_ERROR
        }
    };
    error(id, code, failure.to_string())
}
