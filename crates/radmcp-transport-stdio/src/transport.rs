//! Line-delimited JSON over a byte stream.
//!
//! Generic over reader and writer so tests can drive it with buffers.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::trace;

use crate::error::TransportError;

/// Reads envelopes one line at a time and writes replies the same way.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl StdioTransport<tokio::io::Stdin, tokio::io::Stdout> {
    /// Transport over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Reads the next non-blank line, trimmed.
    ///
    /// Returns `None` on EOF.
    pub async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        let mut line = String::new();
        loop {
            line.clear();
            let n = self
                .reader
                .read_line(&mut line)
                .await
                .map_err(|e| TransportError::Read(e.to_string()))?;
            if n == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                trace!(len = trimmed.len(), "read line");
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    /// Writes `message` followed by a newline and flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing line");
        let write = |e: std::io::Error| TransportError::Write(e.to_string());
        self.writer.write_all(message.as_bytes()).await.map_err(write)?;
        self.writer.write_all(b"\n").await.map_err(write)?;
        self.writer.flush().await.map_err(write)
    }

    /// Consumes the transport, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
