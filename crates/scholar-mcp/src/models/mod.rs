//! Data models for Semantic Scholar API entities and tool inputs.
//!
//! Upstream records use `#[serde(default)]` for optional fields and
//! camelCase renames matching the API naming; tool inputs use snake_case
//! matching the advertised schemas.

mod author;
mod inputs;
mod paper;

pub use author::{Author, AuthorRef, AuthorSearchResult};
pub use inputs::{
    AuthorDetailsInput, AuthorSearchInput, CitationListInput, PaperDetailsInput,
    RecommendationsInput, SearchPapersInput,
};
pub use paper::{CitationBatch, CitationEntry, ExternalIds, OpenAccessPdf, Paper, SearchResult};
