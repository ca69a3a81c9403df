//! Author tools: `get_author_details`, `search_authors`.

use serde_json::json;

use super::{ScholarTool, ToolContext, field_refs};
use crate::config::fields;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{AuthorDetailsInput, AuthorSearchInput};

/// Single author lookup by identifier.
pub struct AuthorDetailsTool;

#[async_trait::async_trait]
impl ScholarTool for AuthorDetailsTool {
    fn name(&self) -> &'static str {
        "get_author_details"
    }

    fn description(&self) -> &'static str {
        "Fetch metadata for one author by Semantic Scholar author ID, \
         including paper count, citation count, and h-index."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "author_id": {
                    "type": "string",
                    "minLength": 1,
                    "description": "Semantic Scholar author ID"
                },
                "fields": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Upstream fields to retrieve (defaults to the standard set)"
                }
            },
            "required": ["author_id"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<serde_json::Value> {
        let params: AuthorDetailsInput = serde_json::from_value(input)?;
        let field_list = field_refs(params.fields.as_deref(), fields::AUTHOR);

        let author = ctx
            .client
            .get_author(&params.author_id, &field_list)
            .await
            .map_err(ToolError::from)?;

        Ok(formatters::compact_author(&author))
    }
}

/// Author name search.
pub struct AuthorSearchTool;

#[async_trait::async_trait]
impl ScholarTool for AuthorSearchTool {
    fn name(&self) -> &'static str {
        "search_authors"
    }

    fn description(&self) -> &'static str {
        "Search for authors by name. Returns a page of matching authors \
         with their bibliometric summaries."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "minLength": 1,
                    "description": "Author name query"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 100,
                    "default": 10
                },
                "offset": {
                    "type": "integer",
                    "minimum": 0,
                    "default": 0
                }
            },
            "required": ["query"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<serde_json::Value> {
        let params: AuthorSearchInput = serde_json::from_value(input)?;

        let result = ctx
            .client
            .search_authors(&params.query, params.offset, params.limit, fields::AUTHOR)
            .await
            .map_err(ToolError::from)?;

        Ok(json!({
            "total": result.total,
            "offset": result.offset,
            "next": result.next,
            "authors": result.data.iter().map(formatters::compact_author).collect::<Vec<_>>(),
        }))
    }
}
