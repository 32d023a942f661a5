//! Line-delimited JSON transport over stdin/stdout.
//!
//! Each JSON-RPC message is a single line terminated by `\n`, as the
//! MCP stdio transport requires. Embedded newlines are not allowed.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::trace;

use crate::error::TransportError;

/// One line read from the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// UTF-8 text with surrounding whitespace trimmed. May be empty.
    Text(String),
    /// The line was not valid UTF-8; carries the decode error message.
    NotUtf8(String),
}

/// Line framing over any async reader/writer pair; `kiosk serve` uses
/// stdin and stdout, tests use in-memory buffers.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Wraps `reader` in a buffer; `writer` is used as is.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Reads the next line.
    ///
    /// `None` means EOF. Blank lines come back as `Frame::Text("")`. A
    /// line that is not UTF-8 is consumed in full and reported as
    /// [`Frame::NotUtf8`] so the caller can answer it and keep reading.
    pub async fn read_line(&mut self) -> Result<Option<Frame>, TransportError> {
        let mut buf = Vec::new();
        let bytes_read = self
            .reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(TransportError::Read)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        match String::from_utf8(buf) {
            Ok(line) => {
                let trimmed = line.trim();
                trace!(len = trimmed.len(), "read message");
                Ok(Some(Frame::Text(trimmed.to_string())))
            }
            Err(e) => {
                trace!(len = bytes_read, "read non-UTF-8 line");
                Ok(Some(Frame::NotUtf8(e.utf8_error().to_string())))
            }
        }
    }

    /// Writes one reply line and flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");

        let mut framed = Vec::with_capacity(message.len() + 1);
        framed.extend_from_slice(message.as_bytes());
        framed.push(b'\n');

        self.writer
            .write_all(&framed)
            .await
            .map_err(TransportError::Write)?;
        self.writer.flush().await.map_err(TransportError::Write)
    }
}
