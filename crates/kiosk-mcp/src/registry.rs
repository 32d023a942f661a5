//! Operation registry.
//!
//! Built once at startup through [`RegistryBuilder`], then frozen into an
//! immutable [`Registry`] shared by reference with the dispatcher. There
//! is no way to register or unregister after `build`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use kiosk_protocol::mcp::{Content, PromptMessage, ResourceContents};
use kiosk_protocol::ValidatedArguments;
use kiosk_types::{OperationKind, ParameterSchema};

use crate::error::{CallFailure, RegistryError};

/// An invocable tool. May suspend on external I/O.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Runs the tool with arguments already validated against its schema.
    async fn call(&self, args: &ValidatedArguments) -> Result<Vec<Content>, CallFailure>;
}

/// A readable resource.
pub trait ResourceHandler: Send + Sync {
    /// Returns the resource body published at `uri`.
    fn read(&self, uri: &str) -> Result<Vec<ResourceContents>, CallFailure>;
}

/// A prompt template.
pub trait PromptHandler: Send + Sync {
    /// Renders the template with validated arguments.
    fn render(&self, args: &ValidatedArguments) -> Result<Vec<PromptMessage>, CallFailure>;
}

/// Handler for one operation, tagged by the kind of result it produces.
#[derive(Clone)]
pub enum Handler {
    /// Produces a content sequence.
    Tool(Arc<dyn ToolHandler>),
    /// Produces resource contents.
    Resource(Arc<dyn ResourceHandler>),
    /// Produces a message sequence.
    Prompt(Arc<dyn PromptHandler>),
}

impl Handler {
    /// The operation kind this handler serves.
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Tool(_) => OperationKind::Tool,
            Self::Resource(_) => OperationKind::Resource,
            Self::Prompt(_) => OperationKind::Prompt,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler::{:?}", self.kind())
    }
}

/// Everything the server knows about one operation.
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    /// Name, unique within its kind.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Declared parameters.
    pub schema: ParameterSchema,
    /// The implementation.
    pub handler: Handler,
    /// URI, for resources only.
    pub uri: Option<String>,
    /// MIME type of the body, for resources only.
    pub mime_type: Option<String>,
}

impl OperationDescriptor {
    /// Describes a tool.
    pub fn tool(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: ParameterSchema,
        handler: impl ToolHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
            handler: Handler::Tool(Arc::new(handler)),
            uri: None,
            mime_type: None,
        }
    }

    /// Describes a parameterless resource published at `uri`.
    pub fn resource(
        name: impl Into<String>,
        uri: impl Into<String>,
        description: impl Into<String>,
        mime_type: impl Into<String>,
        handler: impl ResourceHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema: ParameterSchema::new(),
            handler: Handler::Resource(Arc::new(handler)),
            uri: Some(uri.into()),
            mime_type: Some(mime_type.into()),
        }
    }

    /// Describes a prompt template.
    pub fn prompt(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: ParameterSchema,
        handler: impl PromptHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
            handler: Handler::Prompt(Arc::new(handler)),
            uri: None,
            mime_type: None,
        }
    }

    /// The operation kind.
    pub fn kind(&self) -> OperationKind {
        self.handler.kind()
    }
}

/// Accumulates descriptors before the channel opens.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<OperationDescriptor>,
    index: HashMap<(OperationKind, String), usize>,
    uris: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if an operation of the same kind
    /// and name exists, or [`RegistryError::DuplicateUri`] if a resource
    /// already claims the URI.
    pub fn register(&mut self, descriptor: OperationDescriptor) -> Result<(), RegistryError> {
        let key = (descriptor.kind(), descriptor.name.clone());
        if self.index.contains_key(&key) {
            return Err(RegistryError::Duplicate {
                kind: key.0,
                name: key.1,
            });
        }
        if let Some(uri) = &descriptor.uri {
            if self.uris.contains_key(uri) {
                return Err(RegistryError::DuplicateUri { uri: uri.clone() });
            }
            self.uris.insert(uri.clone(), self.entries.len());
        }

        tracing::debug!(kind = %key.0, name = %key.1, "registered operation");
        self.index.insert(key, self.entries.len());
        self.entries.push(descriptor);
        Ok(())
    }

    /// Names registered so far for `kind`, in registration order.
    pub fn names(&self, kind: OperationKind) -> Vec<String> {
        self.entries
            .iter()
            .filter(|d| d.kind() == kind)
            .map(|d| d.name.clone())
            .collect()
    }

    /// Freezes the registry.
    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
            index: self.index,
            uris: self.uris,
        }
    }
}

/// Immutable mapping from `(kind, name)` to descriptor.
#[derive(Debug)]
pub struct Registry {
    entries: Vec<OperationDescriptor>,
    index: HashMap<(OperationKind, String), usize>,
    uris: HashMap<String, usize>,
}

impl Registry {
    /// Looks up an operation by kind and name.
    pub fn lookup(&self, kind: OperationKind, name: &str) -> Option<&OperationDescriptor> {
        self.index
            .get(&(kind, name.to_string()))
            .and_then(|&i| self.entries.get(i))
    }

    /// Looks up a resource by its URI.
    pub fn resolve_uri(&self, uri: &str) -> Option<&OperationDescriptor> {
        self.uris.get(uri).and_then(|&i| self.entries.get(i))
    }

    /// Iterates operations of `kind` in registration order.
    pub fn iter_kind(&self, kind: OperationKind) -> impl Iterator<Item = &OperationDescriptor> {
        self.entries.iter().filter(move |d| d.kind() == kind)
    }

    /// Iterates every operation in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.entries.iter()
    }

    /// Total number of registered operations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
