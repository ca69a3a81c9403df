//! Semantic Scholar API client.
//!
//! Async HTTP client with connection pooling, anonymous-vs-keyed request
//! pacing, and an explicit retry loop: HTTP 429 is retried with exponential
//! backoff honoring the upstream Retry-After hint, network-level failures
//! are retried once, everything else propagates immediately.

use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{Author, AuthorSearchResult, CitationBatch, Paper, SearchResult};

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct ScholarClient {
    /// Pooled HTTP client.
    http: Client,

    /// Graph API base URL.
    graph_api_url: String,

    /// Recommendations API base URL.
    recommendations_api_url: String,

    /// Pacing delay inserted before each upstream request.
    rate_limit_delay: Duration,

    /// Whether an API key was configured.
    has_api_key: bool,
}

impl ScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().expect("valid content-type header"),
        );

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            http,
            graph_api_url: config.graph_api_url.clone(),
            recommendations_api_url: config.recommendations_api_url.clone(),
            rate_limit_delay: config.rate_limit_delay,
            has_api_key: config.has_api_key(),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    /// Search for papers.
    ///
    /// Returns an ordered page of papers capped at the requested limit.
    pub async fn search_papers(
        &self,
        query: &str,
        offset: u32,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<SearchResult> {
        let url = format!("{}/paper/search", self.graph_api_url);

        let params = vec![
            ("query".to_string(), query.to_string()),
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), clamp_page(limit).to_string()),
            ("fields".to_string(), fields.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Get a single paper by ID.
    ///
    /// Fails with [`ClientError::NotFound`] when the paper does not exist.
    pub async fn get_paper(&self, paper_id: &str, fields: &[&str]) -> ClientResult<Paper> {
        let url = format!("{}/paper/{}", self.graph_api_url, paper_id);
        let params = vec![("fields".to_string(), fields.join(","))];

        self.get(&url, &params).await
    }

    /// Get an author by ID.
    pub async fn get_author(&self, author_id: &str, fields: &[&str]) -> ClientResult<Author> {
        let url = format!("{}/author/{}", self.graph_api_url, author_id);
        let params = vec![("fields".to_string(), fields.join(","))];

        self.get(&url, &params).await
    }

    /// Search for authors.
    pub async fn search_authors(
        &self,
        query: &str,
        offset: u32,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<AuthorSearchResult> {
        let url = format!("{}/author/search", self.graph_api_url);

        let params = vec![
            ("query".to_string(), query.to_string()),
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), clamp_page(limit).to_string()),
            ("fields".to_string(), fields.join(",")),
        ];

        self.get(&url, &params).await
    }

    /// Get papers citing the given paper, in upstream order.
    pub async fn get_citations(
        &self,
        paper_id: &str,
        offset: u32,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        let url = format!("{}/paper/{}/citations", self.graph_api_url, paper_id);

        let params = vec![
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), clamp_page(limit).to_string()),
            ("fields".to_string(), format!("citingPaper.{}", fields.join(",citingPaper."))),
        ];

        let batch: CitationBatch = self.get(&url, &params).await?;
        Ok(batch.into_papers())
    }

    /// Get papers referenced by the given paper, in upstream order.
    pub async fn get_references(
        &self,
        paper_id: &str,
        offset: u32,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        let url = format!("{}/paper/{}/references", self.graph_api_url, paper_id);

        let params = vec![
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), clamp_page(limit).to_string()),
            ("fields".to_string(), format!("citedPaper.{}", fields.join(",citedPaper."))),
        ];

        let batch: CitationBatch = self.get(&url, &params).await?;
        Ok(batch.into_papers())
    }

    /// Get recommendations for one or more seed papers.
    ///
    /// A single positive seed uses the `forpaper` endpoint; multiple seeds
    /// (or negative examples) use the batch endpoint.
    pub async fn get_recommendations(
        &self,
        positive_ids: &[String],
        negative_ids: &[String],
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<Vec<Paper>> {
        let params = vec![
            ("limit".to_string(), limit.clamp(1, api::MAX_RECOMMENDATION_LIMIT).to_string()),
            ("fields".to_string(), fields.join(",")),
        ];

        #[derive(serde::Deserialize)]
        struct RecommendationResult {
            #[serde(rename = "recommendedPapers", default)]
            recommended_papers: Vec<Paper>,
        }

        if positive_ids.len() == 1 && negative_ids.is_empty() {
            let url = format!(
                "{}/papers/forpaper/{}",
                self.recommendations_api_url, positive_ids[0]
            );
            let result: RecommendationResult = self.get(&url, &params).await?;
            Ok(result.recommended_papers)
        } else {
            let url = format!("{}/papers/", self.recommendations_api_url);
            let body = serde_json::json!({
                "positivePaperIds": positive_ids,
                "negativePaperIds": negative_ids,
            });

            let result: RecommendationResult = self.post(&url, &params, &body).await?;
            Ok(result.recommended_papers)
        }
    }

    /// Make a GET request with the retry policy applied.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.request(Method::GET, url, params, None).await?;
        Self::decode(value)
    }

    /// Make a POST request with the retry policy applied.
    async fn post<T>(&self, url: &str, params: &[(String, String)], body: &Value) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.request(Method::POST, url, params, Some(body)).await?;
        Self::decode(value)
    }

    /// Decode a response body into a record type.
    ///
    /// Every documented endpoint returns a JSON object at the top level.
    /// A bare array would deserialize positionally into a struct, so reject
    /// any non-object body as undecodable.
    fn decode<T>(value: Value) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !value.is_object() {
            return Err(ClientError::Decode(serde::de::Error::custom(format!(
                "expected a JSON object, got: {value}"
            ))));
        }
        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Issue one logical request, retrying per policy.
    ///
    /// The request is rebuilt on every attempt so retries send an identical
    /// payload.
    async fn request(
        &self,
        method: Method,
        url: &str,
        params: &[(String, String)],
        body: Option<&Value>,
    ) -> ClientResult<Value> {
        let mut transport_retries = api::TRANSPORT_RETRIES;
        let mut attempt: u32 = 1;

        loop {
            if !self.rate_limit_delay.is_zero() {
                tokio::time::sleep(self.rate_limit_delay).await;
            }

            let mut request = self.http.request(method.clone(), url).query(params);
            if let Some(body) = body {
                request = request.json(body);
            }

            let outcome = match request.send().await {
                Ok(response) => Self::check_status(response).await,
                Err(e) => Err(ClientError::Unavailable(e)),
            };

            match outcome {
                Ok(response) => {
                    return response.json::<Value>().await.map_err(ClientError::Unavailable);
                }
                Err(ClientError::Unavailable(e)) if transport_retries > 0 => {
                    transport_retries -= 1;
                    tracing::warn!(error = %e, url, "Transport failure, retrying once");
                }
                Err(ClientError::RateLimited { retry_after })
                    if attempt < api::RATE_LIMIT_ATTEMPTS =>
                {
                    let delay = retry_after
                        .unwrap_or_else(|| api::BACKOFF_BASE * 2u32.pow(attempt - 1));
                    tracing::warn!(attempt, ?delay, url, "Rate limited, backing off");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Map an HTTP response status to the upstream error taxonomy.
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .map(Duration::from_secs);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400..=499 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
        }
    }
}

/// Clamp a page limit to the Graph API maximum.
fn clamp_page(limit: u32) -> u32 {
    limit.clamp(1, api::MAX_PAGE_LIMIT)
}

impl std::fmt::Debug for ScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScholarClient").field("has_api_key", &self.has_api_key).finish()
    }
}
