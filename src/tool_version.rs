//! Advisory for when the checked-out tool sources are a different version
//! than the running binary.
//!
//! The source tree records its version in `toolsrc/VERSION.txt` as a quoted
//! triple (`"1.2.3"`). The binary reports its own version as a triple followed
//! by a dash suffix (`1.2.4-9-gdeadbee`). The two formats have separate
//! parsers, and either one failing just means no advisory.

use log::debug;
use std::fmt;
use std::path::Path;

use crate::runtime::Runtime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ToolVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the contents of the version marker file, e.g. `"1.2.3"`.
    pub fn parse_marker(contents: &str) -> Option<Self> {
        let quoted = contents.trim().strip_prefix('"')?.strip_suffix('"')?;
        parse_triple(quoted)
    }

    /// Parse the running tool's version string, e.g. `1.2.4-release`.
    pub fn parse_running(version: &str) -> Option<Self> {
        let (triple, _suffix) = version.trim().split_once('-')?;
        parse_triple(triple)
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn parse_triple(s: &str) -> Option<ToolVersion> {
    let mut parts = s.split('.').map(parse_component);
    let version = ToolVersion::new(parts.next()??, parts.next()??, parts.next()??);
    if parts.next().is_some() {
        return None;
    }
    Some(version)
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Newer (or older) tool sources are available than the binary being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub running: ToolVersion,
    pub available: ToolVersion,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Different source is available for portup ({} -> {}). Use bootstrap-portup to update.",
            self.running, self.available
        )
    }
}

/// Compare the marker version with the running version.
pub fn check(marker: Option<ToolVersion>, running: Option<ToolVersion>) -> Option<Advisory> {
    let (available, running) = (marker?, running?);
    if available == running {
        return None;
    }
    Some(Advisory { running, available })
}

/// Read the version marker file and compare it with `running_version`.
///
/// A missing or unreadable marker file produces no advisory.
#[tracing::instrument(skip(runtime, marker_path))]
pub fn check_marker_file<R: Runtime>(
    runtime: &R,
    marker_path: &Path,
    running_version: &str,
) -> Option<Advisory> {
    let marker = match runtime.read_to_string(marker_path) {
        Ok(contents) => ToolVersion::parse_marker(&contents),
        Err(e) => {
            debug!("No version marker at {:?}: {}", marker_path, e);
            None
        }
    };
    if marker.is_none() {
        debug!("Version marker {:?} is missing or malformed", marker_path);
    }

    let running = ToolVersion::parse_running(running_version);
    if running.is_none() {
        debug!("Running version {:?} is not a dotted triple", running_version);
    }

    check(marker, running)
}
