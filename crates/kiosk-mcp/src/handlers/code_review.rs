//! `code-review` prompt.
//!
//! Renders a fixed Korean review rubric around the submitted code. The
//! server never calls a model itself; the client sends the message on.

use kiosk_protocol::mcp::{Content, PromptMessage, Role};
use kiosk_protocol::ValidatedArguments;
use kiosk_types::{ParamType, ParameterSchema};

use crate::error::CallFailure;
use crate::registry::{OperationDescriptor, PromptHandler};

/// Prompt name.
pub const NAME: &str = "code-review";

const RUBRIC: &str = "다음 코드를 리뷰해주세요. 아래 항목별로 평가하고 구체적인 예시를 들어 설명해주세요.

1. 코드 품질과 가독성
2. 잠재적인 버그나 오류
3. 성능 개선 사항
4. 보안 취약점
5. 개선 제안";

/// Builds the review instruction with `code` embedded verbatim.
pub fn review_text(code: &str) -> String {
    format!("{RUBRIC}\n\n```\n{code}\n```")
}

struct CodeReviewPrompt;

impl PromptHandler for CodeReviewPrompt {
    fn render(&self, args: &ValidatedArguments) -> Result<Vec<PromptMessage>, CallFailure> {
        Ok(vec![PromptMessage {
            role: Role::User,
            content: Content::text(review_text(args.string("code")?)),
        }])
    }
}

/// Registry entry for the prompt.
pub fn descriptor() -> OperationDescriptor {
    OperationDescriptor::prompt(
        NAME,
        "Ask a model to review a piece of code",
        ParameterSchema::new().param("code", ParamType::String, "Source code to review"),
        CodeReviewPrompt,
    )
}
