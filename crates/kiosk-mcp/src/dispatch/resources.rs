//! `resources/list` and `resources/read`.

use serde_json::Value;

use kiosk_protocol::mcp::{
    McpResourceDefinition, ResourcesListResult, ResourcesReadParams, ResourcesReadResult,
};
use kiosk_protocol::{error_codes, RequestId};
use kiosk_types::OperationKind;

use super::{error, failure_reply, parse_params, success};
use crate::dispatcher::{Dispatcher, OperationRequest};
use crate::envelope::{Envelope, OperationOutput};
use crate::error::CallFailure;
use crate::handler::JsonRpcOutput;
use crate::registry::Registry;

pub(crate) fn handle_resources_list(id: RequestId, registry: &Registry) -> JsonRpcOutput {
    let resources = registry
        .iter_kind(OperationKind::Resource)
        .map(|d| McpResourceDefinition {
            uri: d.uri.clone().unwrap_or_else(|| d.name.clone()),
            name: d.name.clone(),
            description: Some(d.description.clone()),
            mime_type: d.mime_type.clone(),
        })
        .collect();
    success(id, &ResourcesListResult { resources })
}

/// Reads a resource by URI.
pub(crate) async fn handle_resources_read(
    id: RequestId,
    params: &Option<Value>,
    dispatcher: &Dispatcher,
) -> JsonRpcOutput {
    let read: ResourcesReadParams = match parse_params(&id, params, "resources/read") {
        Ok(r) => r,
        Err(out) => return out,
    };

    let Some(descriptor) = dispatcher.registry().resolve_uri(&read.uri) else {
        let failure = CallFailure::UnknownOperation {
            kind: OperationKind::Resource,
            name: read.uri,
        };
        return failure_reply(id, &failure);
    };

    let request = OperationRequest::new(OperationKind::Resource, &descriptor.name, Value::Null);
    match dispatcher.handle(&request).await {
        Envelope::Success(OperationOutput::Contents(contents)) => {
            success(id, &ResourcesReadResult { contents })
        }
        Envelope::Success(_) => error(
            id,
            error_codes::INTERNAL_ERROR,
            format!("resource '{}' returned a non-resource result", request.name),
        ),
        Envelope::Failure(f) => failure_reply(id, &f),
    }
}
