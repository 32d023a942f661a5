//! `kiosk serve` command.
//!
//! Builds the registry, then serves MCP over stdin/stdout until EOF or
//! Ctrl-C.

use clap::Args;

use kiosk_config::KioskConfig;
use kiosk_transport_stdio::{McpHandler, McpServer, StdioTransport};

use crate::{output, shared};

/// Start the MCP server on stdio.
#[derive(Debug, Args)]
pub struct ServeArgs {}

/// Executes the serve command.
pub async fn execute(_args: &ServeArgs, config: &KioskConfig) -> anyhow::Result<()> {
    // Registration errors abort here, before the channel opens.
    let registry = shared::build_registry(config)?;
    let handler = McpHandler::new(registry, &config.server);

    let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    let mut server = McpServer::new(transport, handler);
    tracing::info!(name = %config.server.name, "kiosk MCP server ready on stdio");

    tokio::select! {
        result = server.run() => {
            result.map_err(|e| {
                output::print_diagnostic(&e);
                anyhow::anyhow!("server error: {e}")
            })?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
