//! `prompts/list` and `prompts/get`.

use serde_json::Value;

use kiosk_protocol::mcp::{
    McpPromptArgument, McpPromptDefinition, PromptsGetParams, PromptsGetResult, PromptsListResult,
};
use kiosk_protocol::{error_codes, RequestId};
use kiosk_types::OperationKind;

use super::{error, failure_reply, parse_params, success};
use crate::dispatcher::{Dispatcher, OperationRequest};
use crate::envelope::{Envelope, OperationOutput};
use crate::handler::JsonRpcOutput;
use crate::registry::Registry;

pub(crate) fn handle_prompts_list(id: RequestId, registry: &Registry) -> JsonRpcOutput {
    let prompts = registry
        .iter_kind(OperationKind::Prompt)
        .map(|d| McpPromptDefinition {
            name: d.name.clone(),
            description: Some(d.description.clone()),
            arguments: d
                .schema
                .iter()
                .map(|p| McpPromptArgument {
                    name: p.name.clone(),
                    description: Some(p.description.clone()),
                    required: true,
                })
                .collect(),
        })
        .collect();
    success(id, &PromptsListResult { prompts })
}

/// Renders a prompt template.
pub(crate) async fn handle_prompts_get(
    id: RequestId,
    params: &Option<Value>,
    dispatcher: &Dispatcher,
) -> JsonRpcOutput {
    let get: PromptsGetParams = match parse_params(&id, params, "prompts/get") {
        Ok(g) => g,
        Err(out) => return out,
    };

    let request = OperationRequest::new(OperationKind::Prompt, get.name, get.arguments);
    match dispatcher.handle(&request).await {
        Envelope::Success(OperationOutput::Messages(messages)) => {
            let description = dispatcher
                .registry()
                .lookup(OperationKind::Prompt, &request.name)
                .map(|d| d.description.clone());
            success(
                id,
                &PromptsGetResult {
                    description,
                    messages,
                },
            )
        }
        Envelope::Success(_) => error(
            id,
            error_codes::INTERNAL_ERROR,
            format!("prompt '{}' returned a non-prompt result", request.name),
        ),
        Envelope::Failure(f) => failure_reply(id, &f),
    }
}
