//! # kiosk-mcp
//!
//! MCP method dispatch (APPLICATION layer).
//!
//! Holds the immutable operation [`Registry`], the [`Dispatcher`] that
//! turns an operation request into exactly one [`Envelope`], the
//! `McpHandler` that maps JSON-RPC methods onto it, and the built-in
//! tools, resource and prompt.

mod dispatch;
pub mod builtin;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod inference;
pub mod registry;

pub use builtin::builtin_registry;
pub use dispatcher::{Dispatcher, OperationRequest};
pub use envelope::{Envelope, OperationOutput};
pub use error::{CallFailure, RegistryError};
pub use handler::{JsonRpcOutput, McpHandler};
pub use inference::{HfInferenceClient, ImageGenerator, InferenceError};
pub use registry::{
    Handler, OperationDescriptor, PromptHandler, Registry, RegistryBuilder, ResourceHandler,
    ToolHandler,
};
