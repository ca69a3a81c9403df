//! MCP server: request dispatch over stdio.
//!
//! One request is processed at a time, to completion, in arrival order;
//! responses are written in the same order. The server owns the registry
//! and the shared client context and carries no other per-request state.

pub mod rpc;
mod stdio;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use crate::client::ScholarClient;
use crate::error::ToolError;
use crate::registry::ToolRegistry;
use crate::tools::{self, ToolContext};

use self::rpc::{JsonRpcRequest, JsonRpcResponse};

/// MCP server over stdio.
pub struct McpServer {
    /// Tool catalog with compiled input schemas.
    registry: ToolRegistry,

    /// Tool execution context.
    ctx: ToolContext,

    /// Bound on a single tool invocation.
    tool_timeout: Duration,
}

impl McpServer {
    /// Create a new server with the full tool catalog.
    ///
    /// # Errors
    ///
    /// Returns error if a tool schema fails to compile.
    pub fn new(client: ScholarClient, tool_timeout: Duration) -> anyhow::Result<Self> {
        let registry = ToolRegistry::new(tools::register_all_tools())?;
        let ctx = ToolContext::new(Arc::new(client));

        Ok(Self { registry, ctx, tool_timeout })
    }

    /// Number of registered tools.
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.registry.len()
    }

    /// Run the dispatch loop over stdin/stdout until end of input.
    ///
    /// # Errors
    ///
    /// Returns error only on I/O channel failure; tool and upstream
    /// failures become structured responses.
    pub async fn run_stdio(&self) -> anyhow::Result<()> {
        stdio::run(self).await
    }

    /// Process one input frame; `None` means no response is owed
    /// (blank line or notification).
    ///
    /// # Errors
    ///
    /// Returns error if the response cannot be serialized.
    pub async fn handle_line(&self, line: &str) -> anyhow::Result<Option<String>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(request) => request,
            Err(e) => {
                // Unrecoverable framing: respond with a null id and keep serving.
                let response = JsonRpcResponse::failure(
                    None,
                    rpc::PARSE_ERROR,
                    "protocol_error",
                    format!("Parse error: {e}"),
                );
                return Ok(Some(serde_json::to_string(&response)?));
            }
        };

        match self.handle_request(request).await {
            Some(response) => Ok(Some(serde_json::to_string(&response)?)),
            None => Ok(None),
        }
    }

    /// Dispatch one parsed request; `None` for notifications.
    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "Received request");

        match request.method.as_str() {
            "initialize" => Some(self.handle_initialize(request.id, &request.params)),
            "initialized" | "notifications/initialized" | "notifications/cancelled" => {
                if request.is_notification() {
                    None
                } else {
                    Some(JsonRpcResponse::success(request.id, json!({})))
                }
            }
            "ping" => Some(JsonRpcResponse::success(request.id, json!({}))),
            "tools/list" => Some(self.handle_tools_list(request.id)),
            "tools/call" => Some(self.handle_tools_call(request.id, &request.params).await),
            _ => {
                if request.is_notification() {
                    None
                } else {
                    Some(JsonRpcResponse::failure(
                        request.id,
                        rpc::METHOD_NOT_FOUND,
                        "protocol_error",
                        format!("Method not found: {}", request.method),
                    ))
                }
            }
        }
    }

    fn handle_initialize(
        &self,
        id: Option<serde_json::Value>,
        params: &serde_json::Value,
    ) -> JsonRpcResponse {
        let protocol_version =
            params.get("protocolVersion").and_then(|v| v.as_str()).unwrap_or("2024-11-05");

        tracing::info!(protocol_version, "MCP initialize");

        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": protocol_version,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "scholar-mcp",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Option<serde_json::Value>) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "tools": self.registry.descriptors()
            }),
        )
    }

    async fn handle_tools_call(
        &self,
        id: Option<serde_json::Value>,
        params: &serde_json::Value,
    ) -> JsonRpcResponse {
        let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
            return JsonRpcResponse::failure(
                id,
                rpc::INVALID_PARAMS,
                "invalid_arguments",
                "Missing 'name' parameter",
            );
        };

        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        // Validation failures never reach the upstream client.
        if let Err(e) = self.registry.validate(tool_name, &arguments) {
            tracing::debug!(tool = %tool_name, error = %e, "Rejected arguments");
            return JsonRpcResponse::failure(id, rpc::INVALID_PARAMS, e.kind(), e.to_string());
        }

        let tool = match self.registry.resolve(tool_name) {
            Ok(tool) => tool,
            Err(e) => {
                return JsonRpcResponse::failure(id, rpc::INVALID_PARAMS, e.kind(), e.to_string());
            }
        };

        tracing::info!(tool = %tool_name, "Executing tool");

        let outcome = tokio::time::timeout(self.tool_timeout, tool.execute(&self.ctx, arguments))
            .await
            .unwrap_or(Err(ToolError::Timeout(self.tool_timeout)));

        match outcome {
            Ok(result) => {
                let text = serde_json::to_string(&result).unwrap_or_default();
                JsonRpcResponse::success(
                    id,
                    json!({
                        "content": [{
                            "type": "text",
                            "text": text
                        }]
                    }),
                )
            }
            Err(e) => {
                tracing::error!(tool = %tool_name, kind = e.kind(), error = %e, "Tool execution failed");
                JsonRpcResponse::failure(id, rpc::TOOL_ERROR, e.kind(), e.to_user_message())
            }
        }
    }
}
