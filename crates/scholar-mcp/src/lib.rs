//! Scholar MCP Server
//!
//! A Model Context Protocol (MCP) server for the Semantic Scholar Graph API.
//! Exposes paper search, paper/author metadata, citation graph listings, and
//! recommendations as schema-described tools over newline-framed JSON-RPC on
//! stdin/stdout.
//!
//! # Example
//!
//! ```no_run
//! use scholar_mcp::{client::ScholarClient, config::Config, server::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let client = ScholarClient::new(&config)?;
//!     let server = McpServer::new(client, config.tool_timeout)?;
//!     server.run_stdio().await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod registry;
pub mod server;
pub mod tools;

pub use client::ScholarClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
pub use registry::ToolRegistry;
pub use server::McpServer;
