//! Paper data model matching the Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

use super::AuthorRef;

/// A research paper from Semantic Scholar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique Semantic Scholar paper ID.
    pub paper_id: String,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// Number of references in this paper.
    #[serde(default)]
    pub reference_count: Option<i32>,

    /// Fields of study (e.g., "Computer Science", "Medicine").
    #[serde(default)]
    pub fields_of_study: Option<Vec<String>>,

    /// List of authors.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// Publication date in ISO format (YYYY-MM-DD).
    #[serde(default)]
    pub publication_date: Option<String>,

    /// Open access PDF information.
    #[serde(default)]
    pub open_access_pdf: Option<OpenAccessPdf>,

    /// External identifiers (DOI, ArXiv, PubMed, etc.).
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref()?.doi.as_deref()
    }

    /// Get the ArXiv ID if available.
    #[must_use]
    pub fn arxiv_id(&self) -> Option<&str> {
        self.external_ids.as_ref()?.arxiv.as_deref()
    }

    /// Get the open access PDF URL if available.
    #[must_use]
    pub fn pdf_url(&self) -> Option<&str> {
        self.open_access_pdf.as_ref()?.url.as_deref()
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i32 {
        self.citation_count.unwrap_or(0)
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .filter_map(|a| a.name.as_ref())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Open access PDF information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAccessPdf {
    /// Direct URL to the PDF.
    pub url: Option<String>,

    /// Status of open access.
    pub status: Option<String>,
}

/// External identifiers for a paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI")]
    pub doi: Option<String>,

    /// ArXiv preprint ID.
    #[serde(rename = "ArXiv")]
    pub arxiv: Option<String>,

    /// PubMed ID.
    #[serde(rename = "PubMed")]
    pub pubmed: Option<String>,

    /// Semantic Scholar Corpus ID.
    #[serde(rename = "CorpusId")]
    pub corpus_id: Option<i64>,
}

/// Search result wrapper for `/paper/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if more results are available.
    #[serde(default)]
    pub next: Option<i32>,

    /// List of papers in this page.
    #[serde(default)]
    pub data: Vec<Paper>,
}

impl SearchResult {
    /// Check if there are more results available.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

/// One entry of a citations or references listing.
///
/// The upstream wraps each paper under `citingPaper` or `citedPaper`
/// depending on the direction of the edge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationEntry {
    /// Paper citing the queried one (citations listing).
    #[serde(default)]
    pub citing_paper: Option<Paper>,

    /// Paper cited by the queried one (references listing).
    #[serde(default)]
    pub cited_paper: Option<Paper>,
}

impl CitationEntry {
    /// Unwrap whichever side of the edge is populated.
    #[must_use]
    pub fn into_paper(self) -> Option<Paper> {
        self.citing_paper.or(self.cited_paper)
    }
}

/// Result wrapper for `/paper/{id}/citations` and `/paper/{id}/references`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitationBatch {
    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if more results are available.
    #[serde(default)]
    pub next: Option<i32>,

    /// Citation entries in this page.
    #[serde(default)]
    pub data: Vec<CitationEntry>,
}

impl CitationBatch {
    /// Flatten entries into the linked papers, preserving order.
    #[must_use]
    pub fn into_papers(self) -> Vec<Paper> {
        self.data.into_iter().filter_map(CitationEntry::into_paper).collect()
    }
}
