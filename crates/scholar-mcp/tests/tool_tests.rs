//! Mock-based tool tests using wiremock.
//!
//! Drive each tool through the `ScholarTool` trait against a mocked
//! upstream, the way the dispatcher invokes them.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholar_mcp::client::ScholarClient;
use scholar_mcp::config::Config;
use scholar_mcp::tools::{
    AuthorDetailsTool, AuthorSearchTool, PaperCitationsTool, PaperDetailsTool,
    PaperReferencesTool, RecommendationsTool, ScholarTool, SearchPapersTool, ToolContext,
};

fn setup_test_context(mock_server: &MockServer) -> ToolContext {
    let config = Config::for_testing(&mock_server.uri());
    let client = ScholarClient::new(&config).unwrap();
    ToolContext::new(Arc::new(client))
}

fn sample_paper_json(id: &str, title: &str, year: i32, citations: i32) -> serde_json::Value {
    json!({
        "paperId": id,
        "title": title,
        "year": year,
        "citationCount": citations,
        "authors": [{"authorId": "1", "name": "Test Author"}],
        "venue": "Test Conference"
    })
}

// =============================================================================
// search_papers
// =============================================================================

#[tokio::test]
async fn test_search_papers_returns_capped_ordered_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .and(query_param("query", "transformer attention"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 3,
            "offset": 0,
            "data": [
                sample_paper_json("p1", "Paper One", 2020, 30),
                sample_paper_json("p2", "Paper Two", 2021, 20),
                sample_paper_json("p3", "Paper Three", 2022, 10)
            ]
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPapersTool
        .execute(&ctx, json!({"query": "transformer attention", "limit": 5, "offset": 0}))
        .await
        .unwrap();

    let papers = result["papers"].as_array().unwrap();
    assert!(papers.len() <= 5);
    assert_eq!(papers.len(), 3);
    for paper in papers {
        assert!(!paper["id"].as_str().unwrap().is_empty());
        assert!(!paper["title"].as_str().unwrap().is_empty());
    }
    // Upstream order preserved
    assert_eq!(papers[0]["id"], "p1");
    assert_eq!(papers[2]["id"], "p3");
}

#[tokio::test]
async fn test_search_papers_truncates_overfull_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 3,
            "offset": 0,
            "data": [
                sample_paper_json("p1", "One", 2020, 3),
                sample_paper_json("p2", "Two", 2021, 2),
                sample_paper_json("p3", "Three", 2022, 1)
            ]
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        SearchPapersTool.execute(&ctx, json!({"query": "x", "limit": 2})).await.unwrap();

    assert_eq!(result["papers"].as_array().unwrap().len(), 2);
}

// =============================================================================
// get_paper_details
// =============================================================================

#[tokio::test]
async fn test_paper_details_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sample_paper_json("p1", "Details", 2019, 42)),
        )
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperDetailsTool.execute(&ctx, json!({"paper_id": "p1"})).await.unwrap();

    assert_eq!(result["id"], "p1");
    assert_eq!(result["title"], "Details");
    assert_eq!(result["citations"], 42);
}

#[tokio::test]
async fn test_paper_details_nonexistent_id_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/doesnotexist"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Paper not found"))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err =
        PaperDetailsTool.execute(&ctx, json!({"paper_id": "doesnotexist"})).await.unwrap_err();

    assert_eq!(err.kind(), "not_found");
}

// =============================================================================
// get_author_details / search_authors
// =============================================================================

#[tokio::test]
async fn test_author_details_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/1741101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorId": "1741101",
            "name": "Ashish Vaswani",
            "paperCount": 40,
            "citationCount": 120000,
            "hIndex": 25
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = AuthorDetailsTool.execute(&ctx, json!({"author_id": "1741101"})).await.unwrap();

    assert_eq!(result["id"], "1741101");
    assert_eq!(result["name"], "Ashish Vaswani");
    assert_eq!(result["hIndex"], 25);
}

#[tokio::test]
async fn test_author_details_nonexistent_id_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/0"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Author not found"))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = AuthorDetailsTool.execute(&ctx, json!({"author_id": "0"})).await.unwrap_err();

    assert_eq!(err.kind(), "not_found");
}

#[tokio::test]
async fn test_author_search_lists_matches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .and(query_param("query", "hinton"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "offset": 0,
            "data": [{"authorId": "a1", "name": "Geoffrey Hinton", "hIndex": 150}]
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = AuthorSearchTool.execute(&ctx, json!({"query": "hinton"})).await.unwrap();

    assert_eq!(result["total"], 1);
    assert_eq!(result["authors"][0]["name"], "Geoffrey Hinton");
}

// =============================================================================
// get_paper_citations / get_paper_references
// =============================================================================

#[tokio::test]
async fn test_citations_tool_preserves_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1/citations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "data": [
                {"citingPaper": sample_paper_json("c1", "First Citer", 2021, 4)},
                {"citingPaper": sample_paper_json("c2", "Second Citer", 2022, 2)}
            ]
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperCitationsTool.execute(&ctx, json!({"paper_id": "p1"})).await.unwrap();

    let citations = result["citations"].as_array().unwrap();
    assert_eq!(citations[0]["id"], "c1");
    assert_eq!(citations[1]["id"], "c2");
}

#[tokio::test]
async fn test_references_tool_flattens_cited_papers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1/references"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "offset": 0,
            "data": [{"citedPaper": sample_paper_json("r1", "The Reference", 2010, 500)}]
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperReferencesTool.execute(&ctx, json!({"paper_id": "p1"})).await.unwrap();

    assert_eq!(result["paper_id"], "p1");
    assert_eq!(result["references"][0]["id"], "r1");
    assert_eq!(result["references"][0]["title"], "The Reference");
}

// =============================================================================
// get_recommendations
// =============================================================================

#[tokio::test]
async fn test_recommendations_tool_single_seed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recommendations/v1/papers/forpaper/seed1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recommendedPapers": [sample_paper_json("rec1", "Similar Work", 2023, 8)]
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = RecommendationsTool
        .execute(&ctx, json!({"positive_paper_ids": ["seed1"]}))
        .await
        .unwrap();

    assert_eq!(result["recommendations"][0]["id"], "rec1");
}
