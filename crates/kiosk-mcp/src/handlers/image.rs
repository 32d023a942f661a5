//! `generate-image` tool: text-to-image via the inference service.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::warn;

use kiosk_protocol::mcp::{Annotations, Content, Role};
use kiosk_protocol::ValidatedArguments;
use kiosk_types::{DiagnosticError, ParamType, ParameterSchema};

use crate::error::CallFailure;
use crate::inference::ImageGenerator;
use crate::registry::{OperationDescriptor, ToolHandler};

/// Tool name.
pub const NAME: &str = "generate-image";

/// MIME type of generated images.
pub const IMAGE_MIME_TYPE: &str = "image/png";

const IMAGE_PRIORITY: f64 = 0.9;

struct ImageTool {
    generator: Arc<dyn ImageGenerator>,
}

/// Wraps raw image bytes as a base64 image content block.
pub fn image_content(bytes: &[u8]) -> Content {
    Content::Image {
        data: STANDARD.encode(bytes),
        mime_type: IMAGE_MIME_TYPE.to_string(),
        annotations: Some(Annotations {
            audience: vec![Role::User],
            priority: Some(IMAGE_PRIORITY),
        }),
    }
}

#[async_trait]
impl ToolHandler for ImageTool {
    async fn call(&self, args: &ValidatedArguments) -> Result<Vec<Content>, CallFailure> {
        let prompt = args.string("prompt")?;
        match self.generator.generate(prompt).await {
            Ok(bytes) => Ok(vec![image_content(&bytes)]),
            Err(e) => {
                warn!(
                    error = %e,
                    hint = e.hint().as_deref().unwrap_or(""),
                    fix = e.fix().as_deref().unwrap_or(""),
                    "image generation failed"
                );
                Err(CallFailure::external(format!("image generation failed: {e}")))
            }
        }
    }
}

/// Registry entry for the tool.
pub fn descriptor(generator: Arc<dyn ImageGenerator>) -> OperationDescriptor {
    OperationDescriptor::tool(
        NAME,
        "Generate an image from a text description",
        ParameterSchema::new().param(
            "prompt",
            ParamType::String,
            "Text description of the image to generate",
        ),
        ImageTool { generator },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::InferenceError;
    use kiosk_protocol::validate;
    use serde_json::json;

    struct Fixed(Vec<u8>);
    #[async_trait]
    impl ImageGenerator for Fixed {
        async fn generate(&self, _: &str) -> Result<Vec<u8>, InferenceError> {
            Ok(self.0.clone())
        }
    }

    struct Down;
    #[async_trait]
    impl ImageGenerator for Down {
        async fn generate(&self, _: &str) -> Result<Vec<u8>, InferenceError> {
            Err(InferenceError::Status {
                status: 503,
                body: "model loading".into(),
            })
        }
    }

    fn args() -> ValidatedArguments {
        let schema = ParameterSchema::new().param("prompt", ParamType::String, "");
        validate(&schema, &json!({"prompt": "a red fox"})).expect("args")
    }

    #[test]
    fn image_content_is_base64_png() {
        match image_content(b"\x89PNG") {
            Content::Image {
                data,
                mime_type,
                annotations,
            } => {
                assert_eq!(data, "iVBORw==");
                assert_eq!(mime_type, "image/png");
                let a = annotations.expect("annotations");
                assert_eq!(a.audience, vec![Role::User]);
                assert_eq!(a.priority, Some(0.9));
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn success_wraps_generated_bytes() {
        let tool = ImageTool {
            generator: Arc::new(Fixed(vec![1, 2, 3])),
        };
        let content = tool.call(&args()).await.expect("ok");
        assert_eq!(content.len(), 1);
        assert!(matches!(content[0], Content::Image { .. }));
    }

    #[tokio::test]
    async fn service_error_is_external_failure_with_detail() {
        let tool = ImageTool {
            generator: Arc::new(Down),
        };
        let err = tool.call(&args()).await.expect_err("down");
        assert!(matches!(err, CallFailure::External { .. }));
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("model loading"));
    }
}
