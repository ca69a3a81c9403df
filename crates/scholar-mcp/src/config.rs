//! Configuration for the scholar MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Recommendations API endpoint.
    pub const RECOMMENDATIONS_API: &str = "https://api.semanticscholar.org/recommendations/v1";

    /// Per-request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Bound on a single tool invocation, including retries.
    pub const TOOL_TIMEOUT: Duration = Duration::from_secs(30);

    /// Pacing delay between requests without API key (200ms = 5 req/s).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_millis(200);

    /// Pacing delay between requests with API key (10ms = 100 req/s).
    pub const RATE_LIMIT_DELAY_WITH_KEY: Duration = Duration::from_millis(10);

    /// Total attempts for a request answered with HTTP 429.
    pub const RATE_LIMIT_ATTEMPTS: u32 = 3;

    /// Base delay for exponential backoff when no Retry-After hint is given.
    pub const BACKOFF_BASE: Duration = Duration::from_secs(1);

    /// Extra attempts after a network-level failure.
    pub const TRANSPORT_RETRIES: u32 = 1;

    /// Maximum `limit` accepted by Graph API list endpoints.
    pub const MAX_PAGE_LIMIT: u32 = 100;

    /// Maximum `limit` accepted by the recommendations endpoints.
    pub const MAX_RECOMMENDATION_LIMIT: u32 = 500;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Field sets requested from the upstream when the caller does not pick.
pub mod fields {
    /// Default paper fields for search and detail responses.
    pub const PAPER: &[&str] = &[
        "paperId",
        "title",
        "abstract",
        "year",
        "citationCount",
        "referenceCount",
        "fieldsOfStudy",
        "authors",
        "venue",
        "publicationDate",
        "openAccessPdf",
        "externalIds",
    ];

    /// Compact paper fields for citation and reference listings.
    pub const CITATION: &[&str] =
        &["paperId", "title", "year", "citationCount", "authors", "venue", "externalIds"];

    /// Author fields for author queries.
    pub const AUTHOR: &[&str] = &[
        "authorId",
        "name",
        "affiliations",
        "homepage",
        "paperCount",
        "citationCount",
        "hIndex",
        "externalIds",
    ];
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (overridable for mock servers).
    pub graph_api_url: String,

    /// Base URL for Recommendations API (overridable for mock servers).
    pub recommendations_api_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Pacing delay between upstream requests.
    pub rate_limit_delay: Duration,

    /// Bound on a single tool invocation.
    pub tool_timeout: Duration,
}

impl Config {
    /// Create a new configuration with optional API key.
    ///
    /// Without a key the upstream enforces an anonymous rate limit, so the
    /// pacing delay is stricter.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        let has_key = api_key.as_deref().is_some_and(|k| !k.is_empty());
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            graph_api_url: api::GRAPH_API.to_string(),
            recommendations_api_url: api::RECOMMENDATIONS_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            rate_limit_delay: if has_key {
                api::RATE_LIMIT_DELAY_WITH_KEY
            } else {
                api::RATE_LIMIT_DELAY
            },
            tool_timeout: api::TOOL_TIMEOUT,
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            graph_api_url: format!("{base_url}/graph/v1"),
            recommendations_api_url: format!("{base_url}/recommendations/v1"),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::ZERO,
            tool_timeout: Duration::from_secs(5),
        }
    }

    /// Create configuration from the environment.
    ///
    /// Reads `SEMANTIC_SCHOLAR_API_KEY`; absent or empty means anonymous
    /// upstream access.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok())
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.rate_limit_delay, api::RATE_LIMIT_DELAY);
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.rate_limit_delay, api::RATE_LIMIT_DELAY_WITH_KEY);
    }

    #[test]
    fn test_empty_api_key_means_anonymous() {
        let config = Config::new(Some(String::new()));
        assert!(!config.has_api_key());
        assert_eq!(config.rate_limit_delay, api::RATE_LIMIT_DELAY);
    }

    #[test]
    fn test_fields() {
        assert!(fields::PAPER.contains(&"paperId"));
        assert!(fields::PAPER.contains(&"abstract"));
        assert!(fields::AUTHOR.contains(&"hIndex"));
        assert!(fields::CITATION.contains(&"title"));
    }
}
