//! JSON-RPC method routing.
//!
//! `McpHandler` owns the dispatcher and the
//! server identity and forwards each method to a free function in
//! `dispatch`.

use std::sync::Arc;

use tracing::{debug, warn};

use kiosk_config::ServerConfig;
use kiosk_protocol::mcp::methods;
use kiosk_protocol::mcp::Implementation;
use kiosk_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
};

use crate::dispatch::{initialize, prompts, resources, tools};
use crate::dispatcher::Dispatcher;
use crate::registry::Registry;

/// One JSON-RPC reply, success or error.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    /// `result` response.
    Success(JsonRpcResponse),
    /// `error` response.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes to a single JSON line (no trailing newline).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(r) => serde_json::to_string(r),
            Self::Error(e) => serde_json::to_string(e),
        }
    }

    /// Whether this is an `error` response.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Routes MCP methods to the operation dispatcher.
#[derive(Debug, Clone)]
pub struct McpHandler {
    dispatcher: Dispatcher,
    server_info: Implementation,
}

impl McpHandler {
    /// Creates a handler over a frozen registry.
    pub fn new(registry: Arc<Registry>, server: &ServerConfig) -> Self {
        Self {
            dispatcher: Dispatcher::new(registry),
            server_info: Implementation {
                name: server.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// The registry requests are resolved against.
    pub fn registry(&self) -> &Registry {
        self.dispatcher.registry()
    }

    /// Handles a request and returns exactly one reply.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        let params = &request.params;
        debug!(method = %request.method, %id, "handling request");

        match request.method.as_str() {
            methods::INITIALIZE => initialize::handle_initialize(id, params, &self.server_info),
            methods::PING => initialize::handle_ping(id),
            methods::TOOLS_LIST => tools::handle_tools_list(id, self.registry()),
            methods::TOOLS_CALL => tools::handle_tools_call(id, params, &self.dispatcher).await,
            methods::RESOURCES_LIST => resources::handle_resources_list(id, self.registry()),
            methods::RESOURCES_READ => {
                resources::handle_resources_read(id, params, &self.dispatcher).await
            }
            methods::PROMPTS_LIST => prompts::handle_prompts_list(id, self.registry()),
            methods::PROMPTS_GET => prompts::handle_prompts_get(id, params, &self.dispatcher).await,
            other => {
                warn!(method = other, "unknown method");
                JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("unknown method: {other}"),
                ))
            }
        }
    }

    /// Handles a notification. Notifications never get a reply.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        match notification.method.as_str() {
            methods::NOTIFICATIONS_INITIALIZED => debug!("client initialized"),
            other => debug!(method = other, "ignoring notification"),
        }
    }
}
