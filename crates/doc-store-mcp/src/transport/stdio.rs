//! Newline-delimited JSON-RPC over stdin/stdout.

use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::protocol::ProtocolHandler;
use crate::types::{JsonRpcMessage, McpResult};

/// Serves one client over a line-oriented byte stream.
///
/// Each line is handled to completion, and its reply written, before the
/// next line is read.
pub struct StdioTransport {
    handler: ProtocolHandler,
}

impl StdioTransport {
    /// Create a new stdio transport.
    pub fn new(handler: ProtocolHandler) -> Self {
        Self { handler }
    }

    /// Serve the process's stdin and stdout until stdin closes.
    pub async fn run(&self) -> McpResult<()> {
        tracing::info!("Stdio transport started");
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await?;
        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Serve any reader/writer pair until the reader reaches EOF.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> McpResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            tracing::debug!(raw = trimmed, "Received message");

            let reply = match JsonRpcMessage::decode(trimmed) {
                Ok(msg) => self.handler.handle_message(msg).await,
                Err(error) => {
                    tracing::warn!(
                        code = error.error.code,
                        "Rejected message: {}",
                        error.error.message
                    );
                    serde_json::to_value(error).ok()
                }
            };

            if let Some(reply) = reply {
                write_line(&mut writer, &reply).await?;
            }
        }

        Ok(())
    }
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, value: &Value) -> McpResult<()> {
    let mut line = serde_json::to_string(value)?;
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
