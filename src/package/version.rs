//! Opaque package versions and installed/available version pairs.

use std::fmt;

/// A version token taken verbatim from package metadata.
///
/// Versions are never parsed or ordered; two versions are the same only when
/// their strings are byte-for-byte equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The installed version of a package next to the version the catalog offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDiff {
    pub installed: Version,
    pub available: Version,
}

impl VersionDiff {
    pub fn new(installed: Version, available: Version) -> Self {
        Self {
            installed,
            available,
        }
    }
}

impl fmt::Display for VersionDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.installed, self.available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_equality_is_exact() {
        assert_eq!(Version::from("1.0"), Version::new("1.0".to_string()));
        assert_ne!(Version::from("1.0"), Version::from("1.0.0"));
        assert_ne!(Version::from("1.0"), Version::from("1.0 "));
        assert_ne!(Version::from("v1.0"), Version::from("1.0"));
    }

    #[test]
    fn test_version_diff_display() {
        let diff = VersionDiff::new("1.5".into(), "2.0".into());
        assert_eq!(diff.to_string(), "1.5 -> 2.0");
    }

    #[test]
    fn test_version_diff_keeps_versions_verbatim() {
        let diff = VersionDiff::new("2017-03-01-1".into(), "not a version".into());
        assert_eq!(diff.installed.as_str(), "2017-03-01-1");
        assert_eq!(diff.available.as_str(), "not a version");
        assert_eq!(diff.to_string(), "2017-03-01-1 -> not a version");
    }
}
