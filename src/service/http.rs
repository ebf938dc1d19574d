//! HTTP client for GitHub-compatible repository listings.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};

use crate::config::ServiceConfig;
use crate::model::RepoModel;

use super::error::FetchError;
use super::RepositoryService;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Repository service backed by the GitHub REST API (or anything speaking it).
///
/// Lists `/users/{owner}/repos` when an owner is configured, otherwise the
/// public `/repositories` listing.
pub struct HttpRepositoryService {
    client: Client,
    config: ServiceConfig,
}

impl HttpRepositoryService {
    /// Create a new service from config.
    pub fn new(config: ServiceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Full URL the list is fetched from.
    pub fn endpoint(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        match &self.config.owner {
            Some(owner) => format!(
                "{}/users/{}/repos?per_page={}",
                base, owner, self.config.per_page
            ),
            None => format!("{}/repositories", base),
        }
    }

    fn timeout_seconds(&self) -> u64 {
        u64::from(self.config.timeout_seconds)
    }
}

#[async_trait]
impl RepositoryService for HttpRepositoryService {
    async fn fetch_repositories(&self) -> Result<Vec<RepoModel>, FetchError> {
        let url = self.endpoint();
        tracing::debug!(url = %url, owner = ?self.config.owner, "Fetching repositories");

        let mut request = self.client.get(&url).header(ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.config.api_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let start = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout_seconds()))?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            let message = error_message(&body);

            tracing::warn!(
                status = %status,
                error = %message,
                latency_ms,
                "Repository service error"
            );

            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout_seconds()))?;
        let repositories: Vec<RepoModel> = serde_json::from_str(&body)?;

        tracing::debug!(
            count = repositories.len(),
            latency_ms,
            "Fetched repositories"
        );

        Ok(repositories)
    }
}

/// Pull the `message` field out of a GitHub error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}
