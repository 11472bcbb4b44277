//! Client platform detection.
//!
//! Infers the visiting client's OS and CPU architecture from browser-supplied
//! signals (user-agent string plus optional structured hints). The signals are
//! passed in explicitly as a [`ClientEnvironment`] rather than read from
//! ambient globals, so detection can be tested across OS/architecture
//! permutations.

use crate::release::{InstallerArch, InstallerOs};

/// Browser-supplied signals describing the visiting client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientEnvironment {
    /// Full user-agent string.
    pub user_agent: String,
    /// Structured platform hint (`navigator.userAgentData.platform`).
    pub platform: Option<String>,
    /// Legacy platform string (`navigator.platform`).
    pub legacy_platform: Option<String>,
    /// Structured architecture hint (`navigator.userAgentData.architecture`).
    pub architecture: Option<String>,
}

/// The inferred OS and CPU architecture of the requesting client.
///
/// Architecture is only meaningful once the OS is known, so the unknown case
/// carries no architecture at all and callers must handle it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserPlatform {
    Known {
        os: InstallerOs,
        arch: InstallerArch,
    },
    Unknown,
}

impl UserPlatform {
    /// Human-readable label for the download button.
    pub fn label(&self) -> String {
        match self {
            UserPlatform::Unknown => "your platform".to_string(),
            UserPlatform::Known {
                os: InstallerOs::Mac,
                arch,
            } => {
                let chip = match arch {
                    InstallerArch::Arm64 => "Apple Silicon",
                    InstallerArch::X64 => "Intel",
                };
                format!("macOS ({})", chip)
            }
            UserPlatform::Known { os, arch } => {
                let os_label = match os {
                    InstallerOs::Windows => "Windows",
                    _ => "Linux",
                };
                let arch_label = match arch {
                    InstallerArch::Arm64 => "Apple Silicon / ARM64",
                    InstallerArch::X64 => "x64",
                };
                format!("{} ({})", os_label, arch_label)
            }
        }
    }
}

const X64_MARKERS: [&str; 5] = ["x86_64", "x64", "amd64", "win64", "wow64"];

/// Infer the client platform from browser signals.
///
/// Total over its input: every combination of signals (including none at all)
/// yields a [`UserPlatform`], never an error.
pub fn detect_user_platform(environment: Option<&ClientEnvironment>) -> UserPlatform {
    let Some(environment) = environment else {
        return UserPlatform::Unknown;
    };

    let ua = environment.user_agent.to_lowercase();
    let platform = environment
        .platform
        .as_deref()
        .or(environment.legacy_platform.as_deref())
        .unwrap_or("")
        .to_lowercase();
    let architecture = environment
        .architecture
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    let os = if platform.contains("mac") || ua.contains("mac") {
        Some(InstallerOs::Mac)
    } else if platform.contains("win") || ua.contains("win") {
        Some(InstallerOs::Windows)
    } else if platform.contains("linux") || (ua.contains("linux") && !ua.contains("android")) {
        Some(InstallerOs::Linux)
    } else {
        None
    };

    // First non-empty source with a marker wins; later sources are not
    // consulted once a source matched.
    let mut arch = None;
    for source in [architecture.as_str(), platform.as_str(), ua.as_str()] {
        if source.is_empty() {
            continue;
        }

        if source.contains("arm") || source.contains("aarch64") {
            arch = Some(InstallerArch::Arm64);
            break;
        }

        if X64_MARKERS.iter().any(|marker| source.contains(marker)) {
            arch = Some(InstallerArch::X64);
            break;
        }
    }

    let Some(os) = os else {
        return UserPlatform::Unknown;
    };

    let arch = arch.unwrap_or(match os {
        InstallerOs::Mac => InstallerArch::Arm64,
        InstallerOs::Windows | InstallerOs::Linux => InstallerArch::X64,
    });

    UserPlatform::Known { os, arch }
}
