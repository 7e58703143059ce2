/// GitHub client — read-only access to the public profile API.
///
/// Two unauthenticated calls: the account profile, then the most recently
/// updated repositories. No caching, retry or pagination; anonymous rate
/// limits surface as `GitHubError::RateLimited`.
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod view;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::github::models::{Profile, RepositorySummary};

/// Number of repositories requested and kept.
pub const REPO_PAGE_SIZE: usize = 6;
const REQUEST_TIMEOUT_SECS: u64 = 15;
const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("portfolio/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited (status {status})")]
    RateLimited { status: u16 },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where profile data comes from. `GitHubClient` in production; tests swap in fakes.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, GitHubError>;

    /// Repositories sorted by last update, newest first, at most `per_page` of them.
    async fn fetch_repositories(
        &self,
        username: &str,
        per_page: usize,
    ) -> Result<Vec<RepositorySummary>, GitHubError>;
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, GitHubError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GitHubError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            if is_rate_limited(status, response.headers()) {
                return Err(GitHubError::RateLimited {
                    status: status.as_u16(),
                });
            }
            let message = response.text().await.unwrap_or_default();
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_profile(&self, username: &str) -> Result<Profile, GitHubError> {
        self.get_json(&format!("/users/{username}"), &[]).await
    }

    async fn fetch_repositories(
        &self,
        username: &str,
        per_page: usize,
    ) -> Result<Vec<RepositorySummary>, GitHubError> {
        self.get_json(
            &format!("/users/{username}/repos"),
            &[
                ("sort", "updated".to_string()),
                ("per_page", per_page.to_string()),
            ],
        )
        .await
    }
}

/// 429, or 403 with the anonymous quota exhausted.
fn is_rate_limited(status: StatusCode, headers: &header::HeaderMap) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }
    status == StatusCode::FORBIDDEN
        && headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false)
}
