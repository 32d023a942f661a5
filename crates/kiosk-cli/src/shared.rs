//! Setup shared by `serve` and `list`.

use std::sync::Arc;

use kiosk_config::KioskConfig;
use kiosk_mcp::{builtin_registry, HfInferenceClient, Registry};

use crate::output;

/// Builds the frozen operation registry from configuration.
///
/// A missing inference token is not an error here; it only fails the
/// image tool when called. Failures print their cause and fix to
/// stderr before being returned.
pub fn build_registry(config: &KioskConfig) -> anyhow::Result<Arc<Registry>> {
    let generator = HfInferenceClient::new(&config.inference)
        .map_err(|e| {
            output::print_diagnostic(&e);
            anyhow::anyhow!("inference client: {e}")
        })?;
    tracing::debug!(endpoint = generator.endpoint(), "inference client ready");

    let registry = builtin_registry(config, Arc::new(generator))
        .map_err(|e| {
            output::print_diagnostic(&e);
            anyhow::anyhow!("registration failed: {e}")
        })?;
    Ok(Arc::new(registry))
}
