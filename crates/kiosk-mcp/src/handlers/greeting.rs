//! `greeting` tool: localized hello.

use async_trait::async_trait;

use kiosk_protocol::mcp::Content;
use kiosk_protocol::ValidatedArguments;
use kiosk_types::{ParamType, ParameterSchema};

use crate::error::CallFailure;
use crate::registry::{OperationDescriptor, ToolHandler};

/// Tool name.
pub const NAME: &str = "greeting";

const FALLBACK_LANGUAGE: &str = "english";

/// Greeting per lowercase language name.
const GREETINGS: &[(&str, &str)] = &[
    ("english", "Hello"),
    ("korean", "안녕하세요"),
    ("japanese", "こんにちは"),
    ("chinese", "你好"),
    ("spanish", "Hola"),
    ("french", "Bonjour"),
    ("german", "Hallo"),
];

fn lookup(language: &str) -> Option<&'static str> {
    GREETINGS
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, word)| *word)
}

/// Greets `name` in `language`, falling back to English for unknown
/// languages. The language match is case-insensitive.
pub fn greet(name: &str, language: &str) -> String {
    let word = lookup(&language.to_lowercase())
        .or_else(|| lookup(FALLBACK_LANGUAGE))
        .unwrap_or("Hello");
    format!("{word}, {name}!")
}

struct GreetingTool;

#[async_trait]
impl ToolHandler for GreetingTool {
    async fn call(&self, args: &ValidatedArguments) -> Result<Vec<Content>, CallFailure> {
        let text = greet(args.string("name")?, args.string("language")?);
        Ok(vec![Content::text(text)])
    }
}

/// Registry entry for the tool.
pub fn descriptor() -> OperationDescriptor {
    OperationDescriptor::tool(
        NAME,
        "Greet someone by name in the requested language",
        ParameterSchema::new()
            .param("name", ParamType::String, "Name of the person to greet")
            .param(
                "language",
                ParamType::String,
                "Language of the greeting (english, korean, japanese, chinese, spanish, french, german)",
            ),
        GreetingTool,
    )
}
