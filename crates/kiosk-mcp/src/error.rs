//! Dispatch and registration error types.

use kiosk_protocol::ValidationFailure;
use kiosk_types::{DiagnosticError, OperationKind};
use thiserror::Error;

/// Why a single request failed. Every variant is recovered by the
/// dispatcher and rendered as a failure envelope.
#[derive(Debug, Clone, Error)]
pub enum CallFailure {
    /// No operation with that kind and name is registered.
    #[error("unknown {kind}: {name}")]
    UnknownOperation { kind: OperationKind, name: String },
    /// A declared parameter is missing or has the wrong type.
    #[error("{0}")]
    Validation(#[from] ValidationFailure),
    /// The handler rejected the input on business grounds.
    #[error("{message}")]
    Domain { message: String },
    /// A downstream service failed or was unreachable.
    #[error("{message}")]
    External { message: String },
    /// The handler aborted without producing a result.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl CallFailure {
    /// Creates a business-rule failure.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// Creates a downstream-service failure.
    pub fn external(message: impl Into<String>) -> Self {
        Self::External {
            message: message.into(),
        }
    }

    /// Creates an internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl DiagnosticError for CallFailure {
    fn hint(&self) -> Option<String> {
        match self {
            Self::UnknownOperation { kind, .. } => Some(format!(
                "The {kind} is not registered; list the available ones with `{kind}s/list`."
            )),
            Self::Validation(v) => Some(format!(
                "Parameter '{}' must be supplied as a JSON {}.",
                v.parameter, v.expected
            )),
            _ => None,
        }
    }
}

/// Startup-time registration errors. Fatal to process initialization.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two operations of the same kind share a name.
    #[error("duplicate {kind} registration: {name}")]
    Duplicate { kind: OperationKind, name: String },
    /// Two resources share a URI.
    #[error("duplicate resource uri: {uri}")]
    DuplicateUri { uri: String },
}

impl DiagnosticError for RegistryError {
    fn hint(&self) -> Option<String> {
        Some("Operation names must be unique per kind, and resource URIs unique.".into())
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::Duplicate { name, .. } => Some(format!("Rename one of the '{name}' operations.")),
            Self::DuplicateUri { uri } => {
                Some(format!("Change `server.resource_uri` so '{uri}' is not reused."))
            }
        }
    }
}
