//! Transport-layer error types.

use kiosk_types::DiagnosticError;
use thiserror::Error;

/// Errors from the stdio transport. Both are fatal to the server loop;
/// malformed messages are answered in-band instead.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from the input stream.
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),
    /// Failed to write to the output stream.
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),
    /// A reply could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DiagnosticError for TransportError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::Write(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                Some("The client closed its end of the channel.".into())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn broken_pipe_has_hint() {
        let e = TransportError::Write(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(e.hint().expect("hint").contains("closed"));
    }

    #[test]
    fn read_error_message() {
        let e = TransportError::Read(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(e.to_string(), "read error: boom");
        assert!(e.hint().is_none());
    }
}
