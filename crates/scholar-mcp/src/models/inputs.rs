//! Input models for tool parameters.
//!
//! Parsed from arguments that already passed schema validation, so defaults
//! here only fill optional fields.

use serde::{Deserialize, Serialize};

/// Input for `search_papers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPapersInput {
    /// Free-text search query.
    pub query: String,

    /// Maximum papers to return.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Pagination offset.
    #[serde(default)]
    pub offset: u32,

    /// Fields to retrieve; defaults to the standard paper field set.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

/// Input for `get_paper_details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperDetailsInput {
    /// Paper identifier (Semantic Scholar ID, DOI:, ARXIV:, PMID:, ...).
    pub paper_id: String,

    /// Fields to retrieve; defaults to the standard paper field set.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

/// Input for `get_author_details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDetailsInput {
    /// Semantic Scholar author ID.
    pub author_id: String,

    /// Fields to retrieve; defaults to the standard author field set.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

/// Input for `get_paper_citations` and `get_paper_references`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationListInput {
    /// Paper identifier.
    pub paper_id: String,

    /// Maximum papers to return.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Pagination offset.
    #[serde(default)]
    pub offset: u32,
}

/// Input for `search_authors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSearchInput {
    /// Author name query.
    pub query: String,

    /// Maximum authors to return.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Pagination offset.
    #[serde(default)]
    pub offset: u32,
}

/// Input for `get_recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsInput {
    /// Paper IDs to use as positive examples.
    pub positive_paper_ids: Vec<String>,

    /// Paper IDs to avoid.
    #[serde(default)]
    pub negative_paper_ids: Vec<String>,

    /// Maximum recommendations to return.
    #[serde(default = "default_recommendation_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

fn default_recommendation_limit() -> u32 {
    100
}
