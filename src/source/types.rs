use serde::{Deserialize, Serialize};

/// Represents a GitHub release asset as returned by the API.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AssetDocument {
    pub name: String,
    pub size: u64,
    pub browser_download_url: String,
}

/// Represents the GitHub "latest release" document.
///
/// Every field defaults so that a sparse or partially-shaped response still
/// decodes; downstream parsing degrades gracefully rather than erroring.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ReleaseDocument {
    pub tag_name: String,
    pub name: Option<String>,
    pub html_url: String,
    pub published_at: String,
    pub assets: Vec<AssetDocument>,
}
