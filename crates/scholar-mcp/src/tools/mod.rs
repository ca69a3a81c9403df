//! Tool implementations.
//!
//! Each tool declares a name, description, and JSON Schema input contract,
//! and executes one upstream call against the shared client. Arguments are
//! schema-validated by the registry before `execute` is reached.

mod authors;
mod graph;
mod papers;
mod recommend;

pub use authors::{AuthorDetailsTool, AuthorSearchTool};
pub use graph::{PaperCitationsTool, PaperReferencesTool};
pub use papers::{PaperDetailsTool, SearchPapersTool};
pub use recommend::RecommendationsTool;

use std::sync::Arc;

use crate::client::ScholarClient;
use crate::error::ToolResult;

/// Tool execution context.
///
/// Carries the shared upstream client; built once at startup and passed
/// explicitly to every invocation.
pub struct ToolContext {
    /// API client.
    pub client: Arc<ScholarClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<ScholarClient>) -> Self {
        Self { client }
    }
}

/// Trait for invocable tools.
#[async_trait::async_trait]
pub trait ScholarTool: Send + Sync {
    /// Tool name (e.g., "search_papers").
    fn name(&self) -> &'static str;

    /// Tool description for the client.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with schema-validated input.
    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value>;
}

/// All tools in advertised order.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn ScholarTool>> {
    vec![
        Box::new(SearchPapersTool),
        Box::new(PaperDetailsTool),
        Box::new(AuthorDetailsTool),
        Box::new(PaperCitationsTool),
        Box::new(PaperReferencesTool),
        Box::new(AuthorSearchTool),
        Box::new(RecommendationsTool),
    ]
}

/// Borrow a field list as `&str` slices, defaulting when the caller did not
/// pick fields.
pub(crate) fn field_refs<'a>(fields: Option<&'a [String]>, default: &'a [&'a str]) -> Vec<&'a str> {
    fields.map_or_else(|| default.to_vec(), |f| f.iter().map(String::as_str).collect())
}
