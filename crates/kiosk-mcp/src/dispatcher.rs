//! Operation dispatcher.
//!
//! Resolves `(kind, name)`, validates the raw arguments, invokes the
//! handler and wraps whatever happens into one [`Envelope`]. Nothing a
//! handler does, including panicking, escapes as anything but a
//! failure envelope.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use kiosk_protocol::mcp::Content;
use kiosk_protocol::{validate, ValidatedArguments};
use kiosk_types::{DiagnosticError, OperationKind};

use crate::envelope::{Envelope, OperationOutput};
use crate::error::CallFailure;
use crate::registry::{Handler, OperationDescriptor, Registry, ToolHandler};

/// An operation request as seen by the dispatcher.
#[derive(Debug, Clone)]
pub struct OperationRequest {
    /// Operation kind.
    pub kind: OperationKind,
    /// Operation name.
    pub name: String,
    /// Raw, untyped arguments.
    pub arguments: Value,
}

impl OperationRequest {
    /// Creates a request.
    pub fn new(kind: OperationKind, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            kind,
            name: name.into(),
            arguments,
        }
    }
}

/// Stateless dispatcher over a frozen registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
}

impl Dispatcher {
    /// Creates a dispatcher over `registry`.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher resolves against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handles one request. Always returns an envelope.
    pub async fn handle(&self, request: &OperationRequest) -> Envelope {
        debug!(kind = %request.kind, name = %request.name, "dispatching operation");
        match self.execute(request).await {
            Ok(output) => Envelope::Success(output),
            Err(failure) => {
                warn!(
                    kind = %request.kind,
                    name = %request.name,
                    error = %failure,
                    hint = failure.hint().as_deref().unwrap_or(""),
                    "operation failed"
                );
                Envelope::Failure(failure)
            }
        }
    }

    async fn execute(&self, request: &OperationRequest) -> Result<OperationOutput, CallFailure> {
        // 1. Resolve
        let descriptor = self
            .registry
            .lookup(request.kind, &request.name)
            .ok_or_else(|| CallFailure::UnknownOperation {
                kind: request.kind,
                name: request.name.clone(),
            })?;

        // 2. Validate
        let args = validate(&descriptor.schema, &request.arguments)?;

        // 3. Invoke
        let output = invoke(descriptor, args).await?;

        if output.is_empty() {
            return Err(CallFailure::internal(format!(
                "{} '{}' produced no result",
                descriptor.kind(),
                descriptor.name
            )));
        }
        Ok(output)
    }
}

async fn invoke(
    descriptor: &OperationDescriptor,
    args: ValidatedArguments,
) -> Result<OperationOutput, CallFailure> {
    match &descriptor.handler {
        Handler::Tool(tool) => {
            let content = call_tool(Arc::clone(tool), args, &descriptor.name).await?;
            Ok(OperationOutput::Content(content))
        }
        Handler::Resource(resource) => {
            let uri = descriptor.uri.as_deref().unwrap_or(descriptor.name.as_str());
            let contents = guard_sync(&descriptor.name, || resource.read(uri))?;
            Ok(OperationOutput::Contents(contents))
        }
        Handler::Prompt(prompt) => {
            let messages = guard_sync(&descriptor.name, || prompt.render(&args))?;
            Ok(OperationOutput::Messages(messages))
        }
    }
}

/// Runs a tool on its own task so a panic surfaces as a `JoinError`.
/// The caller awaits it to completion before building the envelope.
async fn call_tool(
    tool: Arc<dyn ToolHandler>,
    args: ValidatedArguments,
    name: &str,
) -> Result<Vec<Content>, CallFailure> {
    let task = tokio::spawn(async move { tool.call(&args).await });
    match task.await {
        Ok(result) => result,
        Err(e) if e.is_panic() => Err(CallFailure::internal(format!("tool '{name}' panicked"))),
        Err(e) => Err(CallFailure::internal(format!("tool '{name}' did not finish: {e}"))),
    }
}

fn guard_sync<T>(
    name: &str,
    f: impl FnOnce() -> Result<T, CallFailure>,
) -> Result<T, CallFailure> {
    catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|_| Err(CallFailure::internal(format!("'{name}' panicked"))))
}
