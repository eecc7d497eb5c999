//! Release lookup against the GitHub releases API.
//!
//! `latest` maps to `/releases/latest`; anything else is turned into a
//! `tweers-cli-v<version>` tag and fetched from `/releases/tags/<tag>`.
//! A single failed call is final: there is no retry.

use reqwest::{Client, StatusCode};
use setup_schema::version::tag_for;
use setup_schema::{REPO, Release, VersionSpec};
use thiserror::Error;
use tracing::debug;

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Failed to fetch release {target}: HTTP {status}")]
    Status { target: String, status: StatusCode },

    #[error("Failed to fetch release {target}: {source}")]
    Transport {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse release {target}: {source}")]
    Decode {
        target: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ResolveError {
    /// HTTP status reported by the API, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { source, .. } | Self::Decode { source, .. } => source.status(),
        }
    }
}

/// Client for the release-hosting API of one repository.
#[derive(Debug, Clone)]
pub struct ReleaseResolver {
    client: Client,
    api_url: String,
    repo: String,
}

impl ReleaseResolver {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            api_url: DEFAULT_API_URL.to_string(),
            repo: REPO.to_string(),
        }
    }

    /// Point at a different API host (GitHub Enterprise, test fixtures).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Read releases from a different `owner/repo`.
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = repo.into();
        self
    }

    /// API URL answering for `spec`.
    pub fn release_url(&self, spec: &VersionSpec) -> String {
        let base = format!("{}/repos/{}/releases", self.api_url, self.repo);
        match spec {
            VersionSpec::Latest => format!("{base}/latest"),
            VersionSpec::Exact(version) => format!("{base}/tags/{}", tag_for(version)),
        }
    }

    /// Fetch the release matching `spec`.
    ///
    /// `token` is sent as a bearer credential when present, for higher rate
    /// limits and private repositories.
    pub async fn resolve(
        &self,
        spec: &VersionSpec,
        token: Option<&str>,
    ) -> Result<Release, ResolveError> {
        let url = self.release_url(spec);
        let target = match spec {
            VersionSpec::Latest => "latest".to_string(),
            VersionSpec::Exact(version) => tag_for(version),
        };
        debug!(%url, %target, authenticated = token.is_some(), "Fetching release");

        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(ResolveError::Transport { target, source }),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ResolveError::Status { target, status });
        }

        let release: Release = match response.json().await {
            Ok(release) => release,
            Err(source) => return Err(ResolveError::Decode { target, source }),
        };
        debug!(tag = %release.tag_name, assets = release.assets.len(), "Resolved release");
        Ok(release)
    }
}
