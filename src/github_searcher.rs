use std::future::Future;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use tracing::{debug, info, warn};

use crate::{Args, ResultSet, SearchError, PAGE_SIZE};

pub const DEFAULT_API_URL: &str = "https://api.github.com/search/repositories";

const USER_AGENT: &str = concat!("github-repo-searching/", env!("CARGO_PKG_VERSION"));

/// Parameters of one search call.
///
/// `page` is one-based and omitted for the first fetch of a new query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: Option<u32>,
}

impl SearchRequest {
    pub fn first_page(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            page: None,
        }
    }

    pub fn page(query: impl Into<String>, page: u32) -> Self {
        SearchRequest {
            query: query.into(),
            page: Some(page),
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.query.clone()),
            ("order", "asc".to_string()),
            ("per_page", PAGE_SIZE.to_string()),
        ];
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}

/// Anything that can answer a repository search.
pub trait RepositorySearch: Send + Sync + 'static {
    fn search(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<ResultSet, SearchError>> + Send;
}

/// Quota reported by the GitHub API on every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub remaining: u64,
    pub limit: u64,
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
        };

        Some(RateLimit {
            remaining: header("X-RateLimit-Remaining")?,
            limit: header("X-RateLimit-Limit")?,
            reset: header("X-RateLimit-Reset")
                .and_then(|ts| i64::try_from(ts).ok())
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }

    fn log(&self) {
        debug!("Rate limit: {}/{}", self.remaining, self.limit);
        if self.remaining == 0 {
            match self.reset {
                Some(reset) => warn!("Rate limit exhausted, resets at {}", reset.to_rfc3339()),
                None => warn!("Rate limit exhausted"),
            }
        }
    }
}

pub struct GitHubSearcher {
    client: Client,
    endpoint: Url,
}

impl GitHubSearcher {
    /// Create a searcher for the endpoint configured in `args`
    pub fn new(args: &Args) -> Result<Self, SearchError> {
        Self::with_endpoint(args.api_url.clone())
    }

    pub fn with_endpoint(endpoint: Url) -> Result<Self, SearchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(GitHubSearcher { client, endpoint })
    }

    fn request(&self, request: &SearchRequest) -> RequestBuilder {
        self.client
            .get(self.endpoint.clone())
            .query(&request.query_pairs())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }

    /// Fetch one page of repositories for `request`
    pub async fn search_page(&self, request: &SearchRequest) -> Result<ResultSet, SearchError> {
        debug!(
            "Searching '{}' page {}",
            request.query,
            request.page.unwrap_or(1)
        );
        let response = self.request(request).send().await?;

        if let Some(rate_limit) = RateLimit::from_headers(response.headers()) {
            rate_limit.log();
        }

        let status = response.status();
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            warn!(
                "Search for '{}' rejected at page {}, past the searchable window",
                request.query,
                request.page.unwrap_or(1)
            );
        }
        if !status.is_success() {
            return Err(SearchError::Status { status });
        }

        let body = response.bytes().await?;
        let results: ResultSet = serde_json::from_slice(&body)?;

        info!(
            "Fetched {} of {} results for '{}' page {}",
            results.items.len(),
            results.total_count,
            request.query,
            request.page.unwrap_or(1)
        );
        Ok(results)
    }
}

impl RepositorySearch for GitHubSearcher {
    fn search(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<ResultSet, SearchError>> + Send {
        async move { self.search_page(&request).await }
    }
}
