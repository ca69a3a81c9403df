//! Paper tools: `search_papers`, `get_paper_details`.

use serde_json::json;

use super::{ScholarTool, ToolContext, field_refs};
use crate::config::fields;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{PaperDetailsInput, SearchPapersInput};

/// Relevance-ranked paper search.
pub struct SearchPapersTool;

#[async_trait::async_trait]
impl ScholarTool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "search_papers"
    }

    fn description(&self) -> &'static str {
        "Search Semantic Scholar for papers matching a free-text query. \
         Returns a relevance-ranked page of results with pagination offsets."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "minLength": 1,
                    "description": "Search query (e.g., 'transformer attention')"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 100,
                    "default": 10,
                    "description": "Maximum papers to return"
                },
                "offset": {
                    "type": "integer",
                    "minimum": 0,
                    "default": 0,
                    "description": "Pagination offset"
                },
                "fields": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Upstream fields to retrieve (defaults to the standard set)"
                }
            },
            "required": ["query"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<serde_json::Value> {
        let params: SearchPapersInput = serde_json::from_value(input)?;
        let field_list = field_refs(params.fields.as_deref(), fields::PAPER);

        let result = ctx
            .client
            .search_papers(&params.query, params.offset, params.limit, &field_list)
            .await
            .map_err(ToolError::from)?;

        let papers: Vec<_> = result.data.iter().take(params.limit as usize).collect();
        Ok(json!({
            "total": result.total,
            "offset": result.offset,
            "next": result.next,
            "papers": papers.iter().map(|p| formatters::compact_paper(p)).collect::<Vec<_>>(),
        }))
    }
}

/// Single paper lookup by identifier.
pub struct PaperDetailsTool;

#[async_trait::async_trait]
impl ScholarTool for PaperDetailsTool {
    fn name(&self) -> &'static str {
        "get_paper_details"
    }

    fn description(&self) -> &'static str {
        "Fetch full metadata for one paper by ID. Accepts Semantic Scholar \
         IDs as well as DOI:, ARXIV:, PMID:, and CorpusId: prefixed forms."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paper_id": {
                    "type": "string",
                    "minLength": 1,
                    "description": "Paper identifier"
                },
                "fields": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Upstream fields to retrieve (defaults to the standard set)"
                }
            },
            "required": ["paper_id"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<serde_json::Value> {
        let params: PaperDetailsInput = serde_json::from_value(input)?;
        let field_list = field_refs(params.fields.as_deref(), fields::PAPER);

        let paper = ctx
            .client
            .get_paper(&params.paper_id, &field_list)
            .await
            .map_err(ToolError::from)?;

        Ok(formatters::compact_paper(&paper))
    }
}
