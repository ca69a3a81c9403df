//! Author data model matching the Semantic Scholar API schema.

use serde::{Deserialize, Serialize};

/// A research author from Semantic Scholar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique Semantic Scholar author ID.
    pub author_id: String,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Author's institutional affiliations.
    #[serde(default)]
    pub affiliations: Vec<String>,

    /// Author's homepage URL.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Total number of papers by this author.
    #[serde(default)]
    pub paper_count: Option<i32>,

    /// Total citation count across all papers.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// h-index metric.
    #[serde(default)]
    pub h_index: Option<i32>,

    /// External IDs (ORCID, DBLP, etc.).
    #[serde(default)]
    pub external_ids: Option<AuthorExternalIds>,
}

impl Author {
    /// Get the author name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Get the ORCID if available.
    #[must_use]
    pub fn orcid(&self) -> Option<&str> {
        self.external_ids.as_ref()?.orcid.as_deref()
    }

    /// Get the h-index or 0 if not available.
    #[must_use]
    pub fn h_index_value(&self) -> i32 {
        self.h_index.unwrap_or(0)
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i32 {
        self.citation_count.unwrap_or(0)
    }

    /// Get paper count or 0 if not available.
    #[must_use]
    pub fn papers(&self) -> i32 {
        self.paper_count.unwrap_or(0)
    }
}

/// External identifiers for an author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorExternalIds {
    /// ORCID identifier.
    #[serde(rename = "ORCID")]
    pub orcid: Option<String>,

    /// DBLP key.
    #[serde(rename = "DBLP")]
    pub dblp: Option<String>,
}

/// Minimal author reference (used in paper author lists).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Result wrapper for `/author/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorSearchResult {
    /// Total matching authors.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if more results are available.
    #[serde(default)]
    pub next: Option<i32>,

    /// List of authors in this page.
    #[serde(default)]
    pub data: Vec<Author>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_deserializes_camel_case() {
        let author: Author = serde_json::from_value(serde_json::json!({
            "authorId": "1741101",
            "name": "Ashish Vaswani",
            "paperCount": 40,
            "citationCount": 120000,
            "hIndex": 25,
            "externalIds": {"ORCID": "0000-0001-2345-6789"}
        }))
        .unwrap();

        assert_eq!(author.author_id, "1741101");
        assert_eq!(author.h_index_value(), 25);
        assert_eq!(author.orcid(), Some("0000-0001-2345-6789"));
    }

    #[test]
    fn test_author_defaults_missing_fields() {
        let author: Author =
            serde_json::from_value(serde_json::json!({"authorId": "42"})).unwrap();

        assert_eq!(author.name_or_default(), "Unknown");
        assert_eq!(author.citations(), 0);
        assert_eq!(author.papers(), 0);
        assert!(author.affiliations.is_empty());
    }
}
