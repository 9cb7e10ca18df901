//! Installed package status database.
//!
//! The database is a paragraph file at `<root>/installed/status`. Each
//! paragraph records one package build:
//!
//! ```text
//! Package: zlib
//! Version: 1.2.11
//! Architecture: x64-windows
//! Status: install ok installed
//! ```
//!
//! A later paragraph for the same package and triplet replaces an earlier one.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::runtime::Runtime;

use super::{Paragraph, PackageSpec, Version, parse_paragraphs};

/// What the user asked for the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Want {
    Install,
    Hold,
    Deinstall,
    Purge,
    Unknown,
}

impl Want {
    fn parse(s: &str) -> Self {
        match s {
            "install" => Want::Install,
            "hold" => Want::Hold,
            "deinstall" => Want::Deinstall,
            "purge" => Want::Purge,
            _ => Want::Unknown,
        }
    }
}

/// How far the package actually got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    NotInstalled,
    HalfInstalled,
    Installed,
    Unknown,
}

impl InstallState {
    fn parse(s: &str) -> Self {
        match s {
            "not-installed" => InstallState::NotInstalled,
            "half-installed" => InstallState::HalfInstalled,
            "installed" => InstallState::Installed,
            _ => InstallState::Unknown,
        }
    }
}

/// One paragraph of the status database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParagraph {
    pub spec: PackageSpec,
    pub version: Version,
    pub want: Want,
    pub state: InstallState,
}

impl StatusParagraph {
    fn from_paragraph(paragraph: &Paragraph) -> Result<Self> {
        let name = paragraph.required("Package")?;
        let triplet = paragraph.get("Architecture").map(str::to_string);
        let spec = PackageSpec::new(name, triplet)?;
        let version = paragraph.required("Version")?.into();

        // Status: <want> <flag> <state>
        let status: Vec<&str> = paragraph
            .get("Status")
            .unwrap_or_default()
            .split_whitespace()
            .collect();
        let (want, state) = match status.as_slice() {
            [want, _flag, state] => (Want::parse(want), InstallState::parse(state)),
            _ => (Want::Unknown, InstallState::Unknown),
        };

        Ok(Self {
            spec,
            version,
            want,
            state,
        })
    }

    /// Whether the package is really on disk, not merely referenced.
    pub fn is_installed(&self) -> bool {
        self.want == Want::Install && self.state == InstallState::Installed
    }
}

/// A package that is installed, with the version it was installed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledRecord {
    pub spec: PackageSpec,
    pub version: Version,
}

/// Snapshot of the installed package status database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusDatabase {
    paragraphs: Vec<StatusParagraph>,
}

impl StatusDatabase {
    /// Load the database from `path`. A missing file is an empty database.
    #[tracing::instrument(skip(runtime, path))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        if !runtime.exists(path) {
            debug!("Status database {:?} does not exist", path);
            return Ok(Self::default());
        }

        let content = runtime.read_to_string(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load status database {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut paragraphs: Vec<StatusParagraph> = Vec::new();

        for paragraph in parse_paragraphs(content)? {
            let status = StatusParagraph::from_paragraph(&paragraph)?;
            match paragraphs.iter_mut().find(|p| p.spec == status.spec) {
                Some(existing) => *existing = status,
                None => paragraphs.push(status),
            }
        }

        Ok(Self { paragraphs })
    }

    pub fn paragraphs(&self) -> &[StatusParagraph] {
        &self.paragraphs
    }

    /// Records for packages that are actually installed.
    pub fn installed(&self) -> Vec<InstalledRecord> {
        self.paragraphs
            .iter()
            .filter(|p| p.is_installed())
            .map(|p| InstalledRecord {
                spec: p.spec.clone(),
                version: p.version.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    const STATUS: &str = "\
Package: zlib
Version: 1.2.11
Architecture: x86-windows
Status: install ok installed

Package: curl
Version: 7.55.1
Architecture: x86-windows
Status: install ok half-installed

Package: openssl
Version: 1.0.2
Architecture: x86-windows
Status: purge ok not-installed

Package: zlib
Version: 1.2.11
Architecture: x64-windows
Status: install ok installed
";

    #[test]
    fn test_parse_status_paragraph() {
        let db = StatusDatabase::parse(STATUS).unwrap();
        assert_eq!(db.paragraphs().len(), 4);

        let curl = &db.paragraphs()[1];
        assert_eq!(curl.spec.display_name(), "curl:x86-windows");
        assert_eq!(curl.want, Want::Install);
        assert_eq!(curl.state, InstallState::HalfInstalled);

        let openssl = &db.paragraphs()[2];
        assert_eq!(openssl.want, Want::Purge);
        assert_eq!(openssl.state, InstallState::NotInstalled);
    }

    #[test]
    fn test_installed_only_returns_installed_packages() {
        let db = StatusDatabase::parse(STATUS).unwrap();
        let installed = db.installed();

        let names: Vec<String> = installed.iter().map(|r| r.spec.display_name()).collect();
        assert_eq!(names, vec!["zlib:x86-windows", "zlib:x64-windows"]);
        assert!(installed.iter().all(|r| r.version == Version::from("1.2.11")));
    }

    #[test]
    fn test_later_paragraph_replaces_earlier() {
        let content = "\
Package: zlib
Version: 1.2.8
Architecture: x86-windows
Status: install ok installed

Package: zlib
Version: 1.2.11
Architecture: x86-windows
Status: install ok installed
";
        let db = StatusDatabase::parse(content).unwrap();
        let installed = db.installed();
        assert_eq!(installed.len(), 1);
        assert_eq!(installed[0].version, Version::from("1.2.11"));
    }

    #[test]
    fn test_removed_after_install_is_not_installed() {
        let content = "\
Package: zlib
Version: 1.2.11
Status: install ok installed

Package: zlib
Version: 1.2.11
Status: purge ok not-installed
";
        let db = StatusDatabase::parse(content).unwrap();
        assert!(db.installed().is_empty());
    }

    #[test]
    fn test_missing_or_malformed_status_is_not_installed() {
        let content = "Package: zlib\nVersion: 1.2.11\n\nPackage: curl\nVersion: 7.0\nStatus: installed\n";
        let db = StatusDatabase::parse(content).unwrap();
        assert_eq!(db.paragraphs().len(), 2);
        assert!(db.installed().is_empty());
        assert_eq!(db.paragraphs()[1].state, InstallState::Unknown);
    }

    #[test]
    fn test_missing_package_field_is_an_error() {
        let err = StatusDatabase::parse("Version: 1.0\nStatus: install ok installed\n").unwrap_err();
        assert!(err.to_string().contains("Package"));
    }

    #[test]
    fn test_missing_version_field_is_an_error() {
        let err = StatusDatabase::parse("Package: zlib\nStatus: install ok installed\n").unwrap_err();
        assert!(err.to_string().contains("Version"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/root/installed/status");
        runtime
            .expect_exists()
            .with(eq(path.clone()))
            .returning(|_| false);

        let db = StatusDatabase::load(&runtime, &path).unwrap();
        assert!(db.paragraphs().is_empty());
        assert!(db.installed().is_empty());
    }

    #[test]
    fn test_load_reads_file() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/root/installed/status");
        runtime
            .expect_exists()
            .with(eq(path.clone()))
            .returning(|_| true);
        runtime
            .expect_read_to_string()
            .with(eq(path.clone()))
            .returning(|_| Ok(STATUS.to_string()));

        let db = StatusDatabase::load(&runtime, &path).unwrap();
        assert_eq!(db.installed().len(), 2);
    }

    #[test]
    fn test_load_malformed_file_names_path() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/root/installed/status");
        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("garbage line\n".to_string()));

        let err = StatusDatabase::load(&runtime, &path).unwrap_err();
        assert!(format!("{:#}", err).contains("installed/status"));
    }
}
