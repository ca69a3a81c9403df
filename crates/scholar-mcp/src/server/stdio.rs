//! Newline-framed stdio transport.
//!
//! Reads one JSON-RPC frame per line from stdin and writes one response
//! per request to stdout, strictly in arrival order. Logging goes to
//! stderr so stdout stays protocol-clean.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::McpServer;

/// Run the dispatch loop until stdin closes or the channel fails.
pub(super) async fn run(server: &McpServer) -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    tracing::info!(tools = server.tool_count(), "MCP stdio server ready, waiting for requests");

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            tracing::info!("Stdin closed, shutting down");
            break;
        }

        if let Some(response) = server.handle_line(&line).await? {
            stdout.write_all(response.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}
