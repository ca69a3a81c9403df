//! Error types for the scholar MCP server.
//!
//! Uses `thiserror` for structured error handling. Every error maps to a
//! stable kind string that is echoed in JSON-RPC `error.data` so callers
//! can correlate failures without parsing messages.

use std::time::Duration;

/// Errors from the upstream HTTP client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Network-level failure (connection, DNS, TLS, request timeout).
    #[error("upstream unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// Rate limited by the upstream (429 response).
    #[error("rate limited by upstream{}", retry_after.map(|d| format!(", retry after {d:?}")).unwrap_or_default())]
    RateLimited {
        /// Wait hint from the Retry-After header, when present.
        retry_after: Option<Duration>,
    },

    /// Resource not found (404 response).
    #[error("not found: {resource}")]
    NotFound {
        /// Description of the missing resource.
        resource: String,
    },

    /// Invalid request parameters (4xx other than 404/429).
    #[error("upstream rejected request ({status}): {message}")]
    BadRequest {
        /// HTTP status code.
        status: u16,
        /// Error message from the upstream.
        message: String,
    },

    /// Server error (5xx response).
    #[error("upstream server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Upstream replied 2xx but the body did not match the documented shape.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Create a rate limited error with an optional Retry-After hint.
    #[must_use]
    pub const fn rate_limited(retry_after: Option<Duration>) -> Self {
        Self::RateLimited { retry_after }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(status: u16, message: impl Into<String>) -> Self {
        Self::BadRequest { status, message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Stable error kind for protocol responses.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "upstream_unavailable",
            Self::RateLimited { .. } => "upstream_rate_limited",
            Self::NotFound { .. } => "not_found",
            Self::BadRequest { .. } => "upstream_bad_request",
            Self::Server { .. } | Self::Decode(_) => "upstream_server_error",
        }
    }

    /// Get the Retry-After hint if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Errors from tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the upstream client.
    #[error("upstream error: {0}")]
    Client(#[from] ClientError),

    /// Input failed a semantic check after schema validation.
    #[error("invalid input for '{field}': {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Tool invocation exceeded its bounded wait.
    #[error("tool call timed out after {0:?}")]
    Timeout(Duration),

    /// Result serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Stable error kind for protocol responses.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Client(e) => e.kind(),
            Self::Validation { .. } => "invalid_arguments",
            Self::Timeout(_) => "upstream_timeout",
            Self::Serialization(_) => "internal_error",
        }
    }

    /// Convert to a user-facing message for the protocol response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::RateLimited { retry_after: Some(d) }) => {
                format!("Rate limited by Semantic Scholar API. Retry after {d:?}.")
            }
            Self::Client(ClientError::RateLimited { retry_after: None }) => {
                "Rate limited by Semantic Scholar API. Consider configuring an API key."
                    .to_string()
            }
            Self::Client(ClientError::NotFound { resource }) => {
                format!("Not found: {resource}. Check that the ID is correct.")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_kinds() {
        assert_eq!(ClientError::rate_limited(None).kind(), "upstream_rate_limited");
        assert_eq!(ClientError::not_found("paper123").kind(), "not_found");
        assert_eq!(ClientError::bad_request(400, "bad query").kind(), "upstream_bad_request");
        assert_eq!(ClientError::server(503, "down").kind(), "upstream_server_error");
    }

    #[test]
    fn test_client_error_retry_after() {
        let err = ClientError::rate_limited(Some(Duration::from_secs(60)));
        assert_eq!(err.retry_after(), Some(Duration::from_secs(60)));

        assert_eq!(ClientError::not_found("paper").retry_after(), None);
        assert_eq!(ClientError::rate_limited(None).retry_after(), None);
    }

    #[test]
    fn test_tool_error_kinds() {
        assert_eq!(ToolError::validation("query", "must not be empty").kind(), "invalid_arguments");
        assert_eq!(ToolError::Timeout(Duration::from_secs(30)).kind(), "upstream_timeout");
        assert_eq!(
            ToolError::Client(ClientError::not_found("author 42")).kind(),
            "not_found"
        );
    }

    #[test]
    fn test_tool_error_user_message() {
        let err = ToolError::validation("query", "must not be empty");
        assert!(err.to_user_message().contains("query"));
        assert!(err.to_user_message().contains("must not be empty"));

        let err = ToolError::Client(ClientError::rate_limited(None));
        assert!(err.to_user_message().contains("API key"));
    }
}
