//! Release data model and parsing.
//!
//! Transforms the raw GitHub release document into a normalized [`Release`],
//! classifying each installer asset by inspecting its filename. Parsing is
//! total: assets with an unrecognized filename suffix are silently dropped,
//! never reported as errors.

use serde::Serialize;

use crate::source::ReleaseDocument;

/// Packaging format of an installer, derived from the filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerFormat {
    Dmg,
    Exe,
    Deb,
    AppImage,
}

/// Target operating system of an installer, a function of its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerOs {
    Mac,
    Windows,
    Linux,
}

impl From<InstallerFormat> for InstallerOs {
    fn from(format: InstallerFormat) -> Self {
        match format {
            InstallerFormat::Exe => InstallerOs::Windows,
            InstallerFormat::Dmg => InstallerOs::Mac,
            InstallerFormat::Deb | InstallerFormat::AppImage => InstallerOs::Linux,
        }
    }
}

/// Target CPU architecture of an installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerArch {
    Arm64,
    X64,
}

/// A downloadable installer belonging to a release.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallerAsset {
    pub name: String,
    pub url: String,
    pub size: u64,
    pub os: InstallerOs,
    pub arch: InstallerArch,
    pub format: InstallerFormat,
}

/// A normalized description of the latest published build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Release {
    /// Release title, falling back to the tag name when GitHub has none.
    pub name: String,
    /// Version tag (e.g., "v1.0.0")
    pub tag_name: String,
    /// Tag name with a single leading "v" stripped, if present.
    pub version: String,
    /// Release page URL.
    pub html_url: String,
    /// Publication date (ISO 8601)
    pub published_at: String,
    /// Installer assets in the order GitHub listed them.
    pub assets: Vec<InstallerAsset>,
}

const EXTENSION_FORMATS: [(&str, InstallerFormat); 4] = [
    (".dmg", InstallerFormat::Dmg),
    (".exe", InstallerFormat::Exe),
    (".appimage", InstallerFormat::AppImage),
    (".deb", InstallerFormat::Deb),
];

/// Classify a filename by its installer suffix, case-insensitively.
///
/// Returns `None` for anything that is not a recognized installer
/// (checksums, signatures, source tarballs, ...).
fn installer_format(name: &str) -> Option<InstallerFormat> {
    let name_lower = name.to_lowercase();
    EXTENSION_FORMATS
        .iter()
        .find(|(extension, _)| name_lower.ends_with(extension))
        .map(|&(_, format)| format)
}

/// Infer the CPU architecture from a filename.
///
/// Plain substring search: an incidental match like "armature" classifies as
/// arm64. Filenames without an architecture marker default to x64.
fn installer_arch(name: &str) -> InstallerArch {
    let name_lower = name.to_lowercase();
    if name_lower.contains("aarch64") || name_lower.contains("arm64") {
        InstallerArch::Arm64
    } else {
        InstallerArch::X64
    }
}

/// Normalize a raw GitHub release document into a [`Release`].
///
/// Pure and total: unrecognized assets are dropped, missing fields degrade
/// to their defaults, and asset order is preserved.
pub fn parse_release(raw: ReleaseDocument) -> Release {
    let version = raw
        .tag_name
        .strip_prefix('v')
        .unwrap_or(&raw.tag_name)
        .to_string();

    let assets = raw
        .assets
        .into_iter()
        .filter_map(|asset| {
            let format = installer_format(&asset.name)?;
            Some(InstallerAsset {
                os: format.into(),
                arch: installer_arch(&asset.name),
                name: asset.name,
                url: asset.browser_download_url,
                size: asset.size,
                format,
            })
        })
        .collect();

    Release {
        name: raw.name.unwrap_or_else(|| raw.tag_name.clone()),
        tag_name: raw.tag_name,
        version,
        html_url: raw.html_url,
        published_at: raw.published_at,
        assets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::AssetDocument;

    fn make_document(tag: &str, name: Option<&str>, asset_names: &[&str]) -> ReleaseDocument {
        ReleaseDocument {
            tag_name: tag.to_string(),
            name: name.map(|n| n.to_string()),
            html_url: "https://example.com/releases/latest".to_string(),
            published_at: "2024-06-01T12:00:00Z".to_string(),
            assets: asset_names
                .iter()
                .map(|name| AssetDocument {
                    name: name.to_string(),
                    size: 1000,
                    browser_download_url: format!("https://example.com/{}", name),
                })
                .collect(),
        }
    }

    #[test]
    fn test_version_strips_leading_v() {
        let release = parse_release(make_document("v2.3.0", Some("Frame 2.3"), &[]));
        assert_eq!(release.version, "2.3.0");
        assert_eq!(release.tag_name, "v2.3.0");
    }

    #[test]
    fn test_version_without_v_prefix_is_verbatim() {
        let release = parse_release(make_document("2.3.0", Some("Frame 2.3"), &[]));
        assert_eq!(release.version, "2.3.0");
    }

    #[test]
    fn test_name_falls_back_to_tag_name() {
        let release = parse_release(make_document("v2.3.0", None, &[]));
        assert_eq!(release.name, "v2.3.0");
        assert_eq!(release.version, "2.3.0");
    }

    #[test]
    fn test_format_and_os_classification() {
        let release = parse_release(make_document(
            "v1.0.0",
            Some("Frame 1.0"),
            &[
                "Frame-1.0.0-x64.dmg",
                "Frame-1.0.0-setup.exe",
                "frame_1.0.0_amd64.deb",
                "Frame-1.0.0-x86_64.AppImage",
            ],
        ));

        let pairs: Vec<_> = release
            .assets
            .iter()
            .map(|a| (a.os, a.format))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (InstallerOs::Mac, InstallerFormat::Dmg),
                (InstallerOs::Windows, InstallerFormat::Exe),
                (InstallerOs::Linux, InstallerFormat::Deb),
                (InstallerOs::Linux, InstallerFormat::AppImage),
            ]
        );
    }

    #[test]
    fn test_classification_is_case_insensitive_but_keeps_name() {
        let release = parse_release(make_document("v1.0.0", None, &["Frame-1.0.0.DMG"]));
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].format, InstallerFormat::Dmg);
        assert_eq!(release.assets[0].name, "Frame-1.0.0.DMG");
    }

    #[test]
    fn test_unrecognized_suffixes_are_dropped() {
        let release = parse_release(make_document(
            "v1.0.0",
            None,
            &[
                "Frame-1.0.0-x64.dmg.sha256",
                "Frame-1.0.0.tar.gz",
                "Frame-1.0.0-setup.exe",
                "latest.yml",
            ],
        ));
        assert_eq!(release.assets.len(), 1);
        assert_eq!(release.assets[0].name, "Frame-1.0.0-setup.exe");
    }

    #[test]
    fn test_arch_from_filename_markers() {
        let release = parse_release(make_document(
            "v1.0.0",
            None,
            &[
                "Frame-1.0.0-aarch64.dmg",
                "Frame-1.0.0-ARM64-setup.exe",
                "frame_1.0.0_amd64.deb",
                "Frame-1.0.0.AppImage",
            ],
        ));
        let archs: Vec<_> = release.assets.iter().map(|a| a.arch).collect();
        assert_eq!(
            archs,
            vec![
                InstallerArch::Arm64,
                InstallerArch::Arm64,
                InstallerArch::X64,
                InstallerArch::X64,
            ]
        );
    }

    #[test]
    fn test_arch_incidental_substring_matches() {
        // Known leniency of the substring heuristic.
        let release = parse_release(make_document("v1.0.0", None, &["armature-arm64-viewer.deb"]));
        assert_eq!(release.assets[0].arch, InstallerArch::Arm64);

        let release = parse_release(make_document("v1.0.0", None, &["charmander.deb"]));
        assert_eq!(release.assets[0].arch, InstallerArch::X64);
    }

    #[test]
    fn test_asset_order_preserved_minus_drops() {
        let release = parse_release(make_document(
            "v1.0.0",
            None,
            &["b.exe", "skip.txt", "a.dmg", "c.deb"],
        ));
        let names: Vec<_> = release.assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["b.exe", "a.dmg", "c.deb"]);
    }

    #[test]
    fn test_asset_fields_copied_verbatim() {
        let release = parse_release(make_document("v1.0.0", None, &["Frame-1.0.0-x64.dmg"]));
        let asset = &release.assets[0];
        assert_eq!(asset.url, "https://example.com/Frame-1.0.0-x64.dmg");
        assert_eq!(asset.size, 1000);
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        let raw: ReleaseDocument = serde_json::from_value(serde_json::json!({
            "tag_name": "v0.1.0"
        }))
        .unwrap();

        let release = parse_release(raw);
        assert_eq!(release.version, "0.1.0");
        assert_eq!(release.name, "v0.1.0");
        assert!(release.assets.is_empty());
    }
}
