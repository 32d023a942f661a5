//! # kiosk-protocol
//!
//! MCP protocol and JSON-RPC 2.0 type definitions, plus the argument
//! validator that turns raw `arguments` objects into typed values.

pub mod jsonrpc;
pub mod mcp;
pub mod schema;

pub use jsonrpc::*;
pub use mcp::methods;
pub use schema::{
    input_schema, validate, ArgValue, FailureReason, ValidatedArguments, ValidationFailure,
};
