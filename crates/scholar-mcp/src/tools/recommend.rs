//! Recommendation tool: `get_recommendations`.

use serde_json::json;

use super::{ScholarTool, ToolContext};
use crate::config::fields;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::RecommendationsInput;

/// Paper recommendations from positive (and optional negative) seeds.
pub struct RecommendationsTool;

#[async_trait::async_trait]
impl ScholarTool for RecommendationsTool {
    fn name(&self) -> &'static str {
        "get_recommendations"
    }

    fn description(&self) -> &'static str {
        "Recommend papers similar to a set of seed papers. Negative seeds \
         steer recommendations away from a topic."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "positive_paper_ids": {
                    "type": "array",
                    "items": {"type": "string"},
                    "minItems": 1,
                    "description": "Paper IDs to use as positive examples"
                },
                "negative_paper_ids": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Paper IDs to avoid"
                },
                "limit": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 500,
                    "default": 100
                }
            },
            "required": ["positive_paper_ids"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<serde_json::Value> {
        let params: RecommendationsInput = serde_json::from_value(input)?;

        let papers = ctx
            .client
            .get_recommendations(
                &params.positive_paper_ids,
                &params.negative_paper_ids,
                params.limit,
                fields::PAPER,
            )
            .await
            .map_err(ToolError::from)?;

        Ok(json!({
            "recommendations": formatters::compact_papers(&papers),
        }))
    }
}
