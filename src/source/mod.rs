//! Latest-release retrieval from the GitHub API.
//!
//! Provides the raw wire types for the releases endpoint and the
//! [`GitHubReleases`] fetcher with its mockable [`LatestRelease`] seam.

mod github;
mod types;

pub use github::{
    FALLBACK_RELEASE_URL, GitHubReleases, LatestRelease, RELEASE_REPO, REPOSITORY_URL,
};
pub use types::{AssetDocument, ReleaseDocument};
