//! GitHub REST transport implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;
use url::Url;

use crate::domain::{ApiConfig, AppError};
use crate::ports::{ApiResponse, GitHubTransport, HttpMethod};

const GITHUB_JSON: &str = "application/vnd.github+json";
const X_GITHUB_API_VERSION: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("gh-dispatch/", env!("CARGO_PKG_VERSION"));

/// Authenticated HTTP client for the GitHub REST API.
#[derive(Clone)]
pub struct HttpGitHubClient {
    token: String,
    base_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitHubClient {
    /// Create a new HTTP client with the given token and configuration.
    pub fn new(token: String, config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token, base_url: with_trailing_slash(config.base_url.clone()), client })
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| AppError::Http(format!("Invalid endpoint '{}': {}", path, e)))
    }
}

impl GitHubTransport for HttpGitHubClient {
    fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<ApiResponse, AppError> {
        let url = self.endpoint_url(path)?;
        debug!(method = method.as_str(), %url, "sending GitHub API request");

        let mut builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };
        builder = builder
            .header(ACCEPT, GITHUB_JSON)
            .header(X_GITHUB_API_VERSION, API_VERSION)
            .bearer_auth(&self.token);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body.to_vec());
        }

        let response = builder.send().map_err(|e| AppError::Http(e.to_string()))?;
        let status = response.status().as_u16();
        let body = match response.bytes() {
            Ok(bytes) => bytes.to_vec(),
            Err(err) => {
                debug!(status, error = %err, "response body unreadable, continuing without it");
                Vec::new()
            }
        };

        debug!(status, bytes = body.len(), "received GitHub API response");
        Ok(ApiResponse { status, body })
    }
}

/// `Url::join` drops the last path segment unless the base ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
