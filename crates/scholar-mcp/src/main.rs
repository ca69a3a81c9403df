//! Scholar MCP Server - Entry Point
//!
//! Long-running stdio process: one JSON-RPC frame per line in, one per
//! request out. Exits 0 when stdin closes, non-zero on startup failure.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scholar_mcp::{Config, McpServer, ScholarClient};

#[derive(Parser, Debug)]
#[command(name = "scholar-mcp")]
#[command(about = "MCP server for the Semantic Scholar API")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY")]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Stdout carries protocol frames; all logging goes to stderr.
    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = Config::new(cli.api_key);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        authenticated = config.has_api_key(),
        "Starting scholar MCP server"
    );

    let client = ScholarClient::new(&config)?;
    let server = McpServer::new(client, config.tool_timeout)?;

    server.run_stdio().await?;

    Ok(())
}
