//! Platform detection and per-platform config file locations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system the host is running on.
///
/// Detected once per pipeline invocation and immutable for that run.
/// Unknown identifiers are preserved verbatim so error messages can name
/// the platform they rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Unsupported(String),
}

impl Platform {
    /// Parse a host-reported platform identifier.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            other => Platform::Unsupported(other.to_string()),
        }
    }

    /// Whether the editor can be launched on this platform.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Unsupported(_))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => write!(f, "macos"),
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
            Platform::Unsupported(raw) => write!(f, "{raw}"),
        }
    }
}

/// Named root a relative config path is resolved against.
///
/// Abstracts OS-specific absolute locations: the host knows where the home
/// and per-user application-data directories live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseDir {
    Home,
    AppData,
}

/// A config file location: relative path plus base-directory anchor.
///
/// Pure data, no I/O. Each command carries exactly one static mapping per
/// supported platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigLocation {
    pub base: BaseDir,
    pub relative: &'static str,
}

impl ConfigLocation {
    pub const fn new(base: BaseDir, relative: &'static str) -> Self {
        Self { base, relative }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_platforms() {
        assert_eq!(Platform::parse("macos"), Platform::MacOs);
        assert_eq!(Platform::parse("windows"), Platform::Windows);
        assert_eq!(Platform::parse("linux"), Platform::Linux);
    }

    #[test]
    fn test_parse_preserves_unknown_identifier() {
        let platform = Platform::parse("freebsd");
        assert_eq!(platform, Platform::Unsupported("freebsd".to_string()));
        assert!(!platform.is_supported());
        assert_eq!(platform.to_string(), "freebsd");
    }

    #[test]
    fn test_display_matches_host_identifiers() {
        assert_eq!(Platform::MacOs.to_string(), "macos");
        assert_eq!(Platform::Windows.to_string(), "windows");
        assert_eq!(Platform::Linux.to_string(), "linux");
    }
}
