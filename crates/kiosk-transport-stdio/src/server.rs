//! MCP server loop over stdio transport.
//!
//! Reads JSON-RPC messages line by line, dispatches requests via
//! `McpHandler`, and writes one reply per request. Notifications (no
//! `id` member) are handled without a reply; anything carrying an `id`
//! is answered, with `-32600` if it is not a well-formed request. Each
//! reply is built in full before the first byte of it is written.

use serde_json::Value;
use tracing::{debug, info, warn};

use kiosk_mcp::{JsonRpcOutput, McpHandler};
use kiosk_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, RequestId,
};

use crate::error::TransportError;
use crate::transport::{Frame, StdioTransport};

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: McpHandler,
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the input stream reaches EOF.
    ///
    /// Requests are handled one at a time, in arrival order.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!(
            operations = self.handler.registry().len(),
            "MCP server listening on stdio"
        );

        loop {
            // 1. Read next line
            let line = match self.transport.read_line().await? {
                Some(Frame::Text(line)) if line.is_empty() => continue,
                Some(Frame::Text(line)) => line,
                Some(Frame::NotUtf8(e)) => {
                    warn!(error = %e, "received a line that is not UTF-8");
                    let reply = JsonRpcErrorResponse::unidentified(
                        error_codes::PARSE_ERROR,
                        format!("parse error: invalid UTF-8: {e}"),
                    );
                    self.write_output(&JsonRpcOutput::Error(reply)).await?;
                    continue;
                }
                None => {
                    info!("stdin closed, shutting down");
                    return Ok(());
                }
            };

            // 2. Request, notification, or garbage
            if let Some(output) = self.handle_line(&line).await {
                self.write_output(&output).await?;
            }
        }
    }

    async fn handle_line(&self, line: &str) -> Option<JsonRpcOutput> {
        let value = match serde_json::from_str::<Value>(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "failed to parse JSON-RPC message");
                return Some(JsonRpcOutput::Error(JsonRpcErrorResponse::unidentified(
                    error_codes::PARSE_ERROR,
                    format!("parse error: {e}"),
                )));
            }
        };

        // An `id` member, whatever its value, means the sender waits for a reply.
        if let Some(raw_id) = value.get("id") {
            let id = serde_json::from_value::<RequestId>(raw_id.clone()).ok();
            return match serde_json::from_value::<JsonRpcRequest>(value) {
                Ok(request) => {
                    debug!(method = %request.method, id = %request.id, "received request");
                    Some(self.handler.dispatch(&request).await)
                }
                Err(e) => Some(invalid_request(id, e)),
            };
        }

        match serde_json::from_value::<JsonRpcNotification>(value) {
            Ok(notif) => {
                debug!(method = %notif.method, "received notification");
                self.handler.handle_notification(&notif);
                None
            }
            Err(e) => Some(invalid_request(None, e)),
        }
    }

    /// Serializes and writes a JSON-RPC output to the transport.
    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        let json = output.to_json()?;
        self.transport.write_line(&json).await
    }
}

/// `-32600` reply, echoing the id when it is one we can represent.
fn invalid_request(id: Option<RequestId>, e: serde_json::Error) -> JsonRpcOutput {
    warn!(error = %e, "message is neither a request nor a notification");
    let message = format!("invalid request: {e}");
    JsonRpcOutput::Error(match id {
        Some(id) => JsonRpcErrorResponse::error(id, error_codes::INVALID_REQUEST, message),
        None => JsonRpcErrorResponse::unidentified(error_codes::INVALID_REQUEST, message),
    })
}
