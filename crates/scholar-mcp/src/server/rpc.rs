//! JSON-RPC 2.0 frame types.
//!
//! Error responses carry a stable kind string in `error.data.kind` so
//! callers can match on failure class without parsing messages.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// JSON-RPC error code: malformed request frame.
pub const PARSE_ERROR: i32 = -32700;

/// JSON-RPC error code: unknown protocol method.
pub const METHOD_NOT_FOUND: i32 = -32601;

/// JSON-RPC error code: unknown tool or invalid arguments.
pub const INVALID_PARAMS: i32 = -32602;

/// JSON-RPC error code: tool execution failure.
pub const TOOL_ERROR: i32 = -32000;

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl JsonRpcRequest {
    /// Whether this frame is a notification (no id, so no response is owed).
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// JSON-RPC version constant.
    const VERSION: &'static str = "2.0";

    /// Build a success response echoing the request id.
    #[must_use]
    pub const fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self { jsonrpc: Cow::Borrowed(Self::VERSION), result: Some(result), error: None, id }
    }

    /// Build an error response with a stable kind in `error.data`.
    #[must_use]
    pub fn failure(
        id: Option<serde_json::Value>,
        code: i32,
        kind: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            jsonrpc: Cow::Borrowed(Self::VERSION),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: Some(serde_json::json!({ "kind": kind })),
            }),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_round_trip() {
        let response = JsonRpcResponse::success(Some(json!(7)), json!({"ok": true}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], 7);
        assert_eq!(value["result"]["ok"], true);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failure_carries_kind_and_id() {
        let response =
            JsonRpcResponse::failure(Some(json!("req-1")), TOOL_ERROR, "not_found", "gone");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], "req-1");
        assert_eq!(value["error"]["code"], TOOL_ERROR);
        assert_eq!(value["error"]["data"]["kind"], "not_found");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_failure_with_null_id_serializes_id() {
        let response = JsonRpcResponse::failure(None, PARSE_ERROR, "protocol_error", "bad frame");
        let value = serde_json::to_value(&response).unwrap();

        // id must be present (null) so clients see the correlation slot
        assert!(value.as_object().unwrap().contains_key("id"));
        assert!(value["id"].is_null());
    }

    #[test]
    fn test_request_notification_detection() {
        let request: JsonRpcRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        }))
        .unwrap();
        assert!(request.is_notification());

        let request: JsonRpcRequest = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": "ping",
            "id": 1
        }))
        .unwrap();
        assert!(!request.is_notification());
    }
}
