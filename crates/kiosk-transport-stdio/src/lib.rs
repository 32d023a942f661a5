//! # kiosk-transport-stdio
//!
//! Stdio transport adapter for MCP JSON-RPC communication.
//!
//! Provides line-delimited JSON transport over stdin/stdout,
//! and a server loop that ties it to an `McpHandler`.

pub mod error;
pub mod server;
pub mod transport;

pub use error::TransportError;
// McpHandler lives in kiosk-mcp (APPLICATION layer); re-exported for convenience.
pub use kiosk_mcp::{JsonRpcOutput, McpHandler};
pub use server::McpServer;
pub use transport::{Frame, StdioTransport};
