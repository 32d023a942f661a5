//! Response envelope: the single outcome of every operation request.

use kiosk_protocol::mcp::{Content, PromptMessage, ResourceContents};

use crate::error::CallFailure;

/// Successful result, shaped by operation kind.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutput {
    /// Tool result.
    Content(Vec<Content>),
    /// Resource body.
    Contents(Vec<ResourceContents>),
    /// Rendered prompt.
    Messages(Vec<PromptMessage>),
}

impl OperationOutput {
    /// Whether the result carries no elements.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Content(c) => c.is_empty(),
            Self::Contents(c) => c.is_empty(),
            Self::Messages(m) => m.is_empty(),
        }
    }
}

/// Outcome of one request, success or failure.
#[derive(Debug, Clone)]
pub enum Envelope {
    /// The handler produced a result.
    Success(OperationOutput),
    /// Lookup, validation or the handler failed.
    Failure(CallFailure),
}

impl Envelope {
    /// Whether the request succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The content sequence of the envelope as seen by a tool caller.
    ///
    /// Failures always yield exactly one text element describing the error.
    /// Resource and prompt successes are not content sequences and yield
    /// `None`.
    pub fn content(&self) -> Option<Vec<Content>> {
        match self {
            Self::Success(OperationOutput::Content(c)) => Some(c.clone()),
            Self::Success(_) => None,
            Self::Failure(f) => Some(vec![Content::text(f.to_string())]),
        }
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&CallFailure> {
        match self {
            Self::Failure(f) => Some(f),
            Self::Success(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_content_is_single_text_element() {
        let env = Envelope::Failure(CallFailure::domain("cannot divide by zero"));
        let content = env.content().expect("content");
        assert_eq!(content.len(), 1);
        assert_eq!(content[0].as_text(), Some("cannot divide by zero"));
        assert!(!env.is_success());
    }

    #[test]
    fn success_content_is_passed_through() {
        let env = Envelope::Success(OperationOutput::Content(vec![Content::text("6 / 3 = 2")]));
        assert!(env.is_success());
        assert!(env.failure().is_none());
        assert_eq!(env.content().expect("content")[0].as_text(), Some("6 / 3 = 2"));
    }

    #[test]
    fn prompt_success_has_no_content_sequence() {
        let env = Envelope::Success(OperationOutput::Messages(vec![]));
        assert!(env.content().is_none());
    }

    #[test]
    fn emptiness_per_shape() {
        assert!(OperationOutput::Content(vec![]).is_empty());
        assert!(OperationOutput::Contents(vec![]).is_empty());
        assert!(!OperationOutput::Content(vec![Content::text("x")]).is_empty());
    }
}
