//! # kiosk-types
//!
//! Domain types for the kiosk MCP server.
//! This crate contains pure data types with no I/O and no dependencies
//! beyond serde.

pub mod error;
pub mod operation;

// Re-exports for convenience.
pub use error::DiagnosticError;
pub use operation::{OperationKind, ParamType, ParameterSchema, ParameterSpec};
