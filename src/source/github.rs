//! GitHub latest-release fetcher.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};

use crate::release::{Release, parse_release};

use super::types::ReleaseDocument;

/// Repository the landing page offers downloads for.
pub const RELEASE_REPO: &str = "66HEX/frame";

/// Where the download section links when no installer can be resolved.
pub const FALLBACK_RELEASE_URL: &str = "https://github.com/66HEX/frame/releases/latest";

/// Project repository shown in the page footer.
pub const REPOSITORY_URL: &str = "https://github.com/66HEX/frame";

const CLIENT_USER_AGENT: &str = "frame-landing-page";
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Trait for fetching the latest release (mockable seam for the page layer).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LatestRelease: Send + Sync {
    /// Fetch and parse the latest published release.
    ///
    /// Returns `None` on any transport or decoding failure. Failures are
    /// logged for operators, never surfaced to the caller.
    async fn latest_release(&self) -> Option<Release>;
}

/// Fetches the latest Frame release from the GitHub API.
pub struct GitHubReleases {
    client: Client,
    api_url: String,
}

impl GitHubReleases {
    /// Create a fetcher against the public GitHub API.
    pub fn new(client: Client) -> Self {
        Self::with_api_url(client, "https://api.github.com")
    }

    /// Create a fetcher against a custom API URL.
    pub fn with_api_url(client: Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.to_string(),
        }
    }

    /// Single request, no retry: the landing page degrades to a generic
    /// download link instead of waiting on a second attempt.
    #[tracing::instrument(skip(self))]
    async fn fetch_latest(&self) -> Result<ReleaseDocument> {
        let url = format!("{}/repos/{}/releases/latest", self.api_url, RELEASE_REPO);
        debug!("Fetching latest release from {}...", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, GITHUB_JSON)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let response = response
            .error_for_status()
            .context("GitHub API returned an error status")?;

        response
            .json::<ReleaseDocument>()
            .await
            .context("Failed to parse JSON response from GitHub API")
    }
}

#[async_trait]
impl LatestRelease for GitHubReleases {
    #[tracing::instrument(skip(self))]
    async fn latest_release(&self) -> Option<Release> {
        match self.fetch_latest().await {
            Ok(document) => Some(parse_release(document)),
            Err(e) => {
                warn!("Failed to fetch release: {:#}", e);
                None
            }
        }
    }
}
