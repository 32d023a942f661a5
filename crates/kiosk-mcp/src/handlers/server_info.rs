//! `server-info` resource: a static description of this server.

use serde::Serialize;

use kiosk_config::ServerConfig;
use kiosk_protocol::mcp::ResourceContents;

use crate::error::CallFailure;
use crate::registry::{OperationDescriptor, ResourceHandler};

/// Resource name.
pub const NAME: &str = "server-info";

/// MIME type of the document.
pub const MIME_TYPE: &str = "application/json";

/// The document served at the resource URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    /// Server name, as sent in the `initialize` reply.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Names of the registered tools, in registration order.
    pub tools: Vec<String>,
    /// One-line summary of what the server offers.
    pub description: String,
}

struct ServerInfoResource {
    info: ServerInfo,
}

impl ResourceHandler for ServerInfoResource {
    fn read(&self, uri: &str) -> Result<Vec<ResourceContents>, CallFailure> {
        let text = serde_json::to_string_pretty(&self.info)
            .map_err(|e| CallFailure::internal(format!("server info: {e}")))?;
        Ok(vec![ResourceContents {
            uri: uri.to_string(),
            mime_type: Some(MIME_TYPE.to_string()),
            text,
        }])
    }
}

/// Registry entry for the resource. `tools` is frozen at this point, so
/// pass the names of every tool registered before it.
pub fn descriptor(server: &ServerConfig, tools: Vec<String>) -> OperationDescriptor {
    let info = ServerInfo {
        name: server.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tools,
        description: server.description.clone(),
    };
    OperationDescriptor::resource(
        NAME,
        server.resource_uri.clone(),
        "Server name, version and available tools",
        MIME_TYPE,
        ServerInfoResource { info },
    )
}
