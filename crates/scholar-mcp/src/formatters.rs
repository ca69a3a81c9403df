//! Compact JSON shaping for tool results.
//!
//! Trims the upstream records down to the fields a model client actually
//! reads, dropping nulls instead of echoing them.

use serde_json::{Value, json};

use crate::models::{Author, Paper};

/// Create a compact paper representation for tool output.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let mut obj = json!({
        "id": paper.paper_id,
        "title": paper.title_or_default(),
        "year": paper.year,
        "citations": paper.citations(),
    });

    if !paper.authors.is_empty() {
        obj["authors"] =
            json!(paper.authors.iter().filter_map(|a| a.name.as_ref()).collect::<Vec<_>>());
    }

    if let Some(venue) = &paper.venue {
        obj["venue"] = json!(venue);
    }

    if let Some(text) = &paper.r#abstract {
        obj["abstract"] = json!(text);
    }

    if let Some(doi) = paper.doi() {
        obj["doi"] = json!(doi);
    }

    if let Some(arxiv) = paper.arxiv_id() {
        obj["arxiv"] = json!(arxiv);
    }

    if let Some(pdf) = paper.pdf_url() {
        obj["pdf"] = json!(pdf);
    }

    if let Some(fields) = &paper.fields_of_study {
        if !fields.is_empty() {
            obj["fields"] = json!(fields);
        }
    }

    obj
}

/// Create a compact author representation for tool output.
#[must_use]
pub fn compact_author(author: &Author) -> Value {
    let mut obj = json!({
        "id": author.author_id,
        "name": author.name_or_default(),
        "hIndex": author.h_index_value(),
        "citations": author.citations(),
        "papers": author.papers(),
    });

    if !author.affiliations.is_empty() {
        obj["affiliations"] = json!(author.affiliations);
    }

    if let Some(orcid) = author.orcid() {
        obj["orcid"] = json!(orcid);
    }

    if let Some(homepage) = &author.homepage {
        obj["homepage"] = json!(homepage);
    }

    obj
}

/// Compact a paper list, preserving order.
#[must_use]
pub fn compact_papers(papers: &[Paper]) -> Value {
    Value::Array(papers.iter().map(compact_paper).collect())
}
