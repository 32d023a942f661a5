//! The built-in operation set.

use std::sync::Arc;

use kiosk_config::KioskConfig;
use kiosk_types::OperationKind;

use crate::error::RegistryError;
use crate::handlers::time::TimeTool;
use crate::handlers::{calc, code_review, greeting, image, server_info, time};
use crate::inference::ImageGenerator;
use crate::registry::{Registry, RegistryBuilder};

/// Builds the frozen registry served by `kiosk serve`.
///
/// Tools are registered first so the server-info document can list them.
///
/// # Errors
///
/// Returns a [`RegistryError`] on a duplicate name or resource URI.
pub fn builtin_registry(
    config: &KioskConfig,
    generator: Arc<dyn ImageGenerator>,
) -> Result<Registry, RegistryError> {
    let mut builder = RegistryBuilder::new();

    builder.register(greeting::descriptor())?;
    builder.register(calc::descriptor())?;
    builder.register(time::descriptor(TimeTool::new()))?;
    builder.register(image::descriptor(generator))?;

    let tools = builder.names(OperationKind::Tool);
    builder.register(server_info::descriptor(&config.server, tools))?;

    builder.register(code_review::descriptor())?;

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::InferenceError;
    use async_trait::async_trait;

    struct NoImages;
    #[async_trait]
    impl ImageGenerator for NoImages {
        async fn generate(&self, _: &str) -> Result<Vec<u8>, InferenceError> {
            Err(InferenceError::MissingToken { var: "HF_TOKEN".into() })
        }
    }

    #[test]
    fn registers_every_operation() {
        let reg = builtin_registry(&KioskConfig::default(), Arc::new(NoImages)).expect("registry");
        let tools: Vec<_> = reg.iter_kind(OperationKind::Tool).map(|d| d.name.as_str()).collect();
        assert_eq!(tools, vec!["greeting", "calc", "time", "generate-image"]);
        assert!(reg.lookup(OperationKind::Resource, "server-info").is_some());
        assert!(reg.resolve_uri("server://info").is_some());
        assert!(reg.lookup(OperationKind::Prompt, "code-review").is_some());
        assert_eq!(reg.len(), 6);
    }

    #[test]
    fn resource_uri_follows_config() {
        let mut config = KioskConfig::default();
        config.server.resource_uri = "kiosk://about".into();
        let reg = builtin_registry(&config, Arc::new(NoImages)).expect("registry");
        assert!(reg.resolve_uri("kiosk://about").is_some());
        assert!(reg.resolve_uri("server://info").is_none());
    }
}
