//! Citation graph tools: `get_paper_citations`, `get_paper_references`.

use serde_json::json;

use super::{ScholarTool, ToolContext};
use crate::config::fields;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::CitationListInput;

fn citation_list_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "paper_id": {
                "type": "string",
                "minLength": 1,
                "description": "Paper identifier"
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
            }
        },
        "required": ["paper_id"],
        "additionalProperties": false
    })
}

/// Papers citing a given paper.
pub struct PaperCitationsTool;

#[async_trait::async_trait]
impl ScholarTool for PaperCitationsTool {
    fn name(&self) -> &'static str {
        "get_paper_citations"
    }

    fn description(&self) -> &'static str {
        "List papers that cite the given paper, in upstream order, with \
         pagination."
    }

    fn input_schema(&self) -> serde_json::Value {
        citation_list_schema()
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<serde_json::Value> {
        let params: CitationListInput = serde_json::from_value(input)?;

        let papers = ctx
            .client
            .get_citations(&params.paper_id, params.offset, params.limit, fields::CITATION)
            .await
            .map_err(ToolError::from)?;

        Ok(json!({
            "paper_id": params.paper_id,
            "citations": formatters::compact_papers(&papers),
        }))
    }
}

/// Papers referenced by a given paper.
pub struct PaperReferencesTool;

#[async_trait::async_trait]
impl ScholarTool for PaperReferencesTool {
    fn name(&self) -> &'static str {
        "get_paper_references"
    }

    fn description(&self) -> &'static str {
        "List papers in the given paper's bibliography, in upstream order, \
         with pagination."
    }

    fn input_schema(&self) -> serde_json::Value {
        citation_list_schema()
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<serde_json::Value> {
        let params: CitationListInput = serde_json::from_value(input)?;

        let papers = ctx
            .client
            .get_references(&params.paper_id, params.offset, params.limit, fields::CITATION)
            .await
            .map_err(ToolError::from)?;

        Ok(json!({
            "paper_id": params.paper_id,
            "references": formatters::compact_papers(&papers),
        }))
    }
}
