//! Installer selection for a detected platform.
//!
//! Picks the single best installer asset from a release for the visiting
//! client. An OS match is required; an exact architecture match is preferred
//! but never mandatory.

use crate::platform::UserPlatform;
use crate::release::{InstallerAsset, InstallerFormat, InstallerOs, Release};

/// Preferred Linux packaging formats, most preferred first.
const LINUX_FORMAT_PREFERENCE: [InstallerFormat; 2] =
    [InstallerFormat::AppImage, InstallerFormat::Deb];

/// Select the best-matching installer for a platform.
///
/// Returns `None` for an unknown platform or when the release carries no
/// asset for the platform's OS. When no asset matches the exact architecture,
/// falls back to the full OS group rather than offering nothing.
pub fn resolve_installer_for_platform<'a>(
    release: &'a Release,
    platform: &UserPlatform,
) -> Option<&'a InstallerAsset> {
    let UserPlatform::Known { os, arch } = platform else {
        return None;
    };

    let matching_os: Vec<&InstallerAsset> =
        release.assets.iter().filter(|asset| asset.os == *os).collect();
    if matching_os.is_empty() {
        return None;
    }

    let arch_matches: Vec<&InstallerAsset> = matching_os
        .iter()
        .copied()
        .filter(|asset| asset.arch == *arch)
        .collect();
    let prioritized_group = if arch_matches.is_empty() {
        matching_os
    } else {
        arch_matches
    };

    if *os == InstallerOs::Linux {
        for format in LINUX_FORMAT_PREFERENCE {
            if let Some(candidate) = prioritized_group
                .iter()
                .copied()
                .find(|asset| asset.format == format)
            {
                return Some(candidate);
            }
        }
    }

    prioritized_group.first().copied()
}
