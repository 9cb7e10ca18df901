//! Port catalog: the package definitions available to install from.
//!
//! Directory structure: `<ports>/<port-name>/CONTROL`

use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::Path;

use crate::runtime::Runtime;

use super::{Version, parse_paragraphs};

pub const CONTROL_FILE: &str = "CONTROL";

/// Port name to the version its definition currently declares.
pub type PortVersions = BTreeMap<String, Version>;

/// The source paragraph of a port definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceParagraph {
    pub name: String,
    pub version: Version,
}

impl SourceParagraph {
    /// Parse the first paragraph of a CONTROL file.
    pub fn parse(content: &str) -> Result<Self> {
        let paragraphs = parse_paragraphs(content)?;
        let Some(source) = paragraphs.first() else {
            anyhow::bail!("CONTROL file contains no paragraphs");
        };

        Ok(Self {
            name: source.required("Source")?.to_string(),
            version: source.required("Version")?.into(),
        })
    }
}

/// Load every port definition found under `ports_dir`.
///
/// Subdirectories without a CONTROL file are skipped. A CONTROL file that
/// cannot be read or parsed fails the whole load.
#[tracing::instrument(skip(runtime, ports_dir))]
pub fn load_all_ports<R: Runtime>(runtime: &R, ports_dir: &Path) -> Result<Vec<SourceParagraph>> {
    let mut ports = Vec::new();

    if !runtime.exists(ports_dir) {
        debug!("Ports directory {:?} does not exist", ports_dir);
        return Ok(ports);
    }

    for port_dir in runtime.read_dir(ports_dir)? {
        if !runtime.is_dir(&port_dir) {
            continue;
        }

        let control_path = port_dir.join(CONTROL_FILE);
        if !runtime.exists(&control_path) {
            debug!("Skipping {:?}: no {} file", port_dir, CONTROL_FILE);
            continue;
        }

        let content = runtime.read_to_string(&control_path)?;
        let port = SourceParagraph::parse(&content)
            .with_context(|| format!("Failed to load port definition {:?}", control_path))?;
        ports.push(port);
    }

    debug!("Loaded {} port definition(s)", ports.len());
    Ok(ports)
}

/// Build the name to version lookup used to find outdated packages.
///
/// When two definitions share a name the later one wins.
pub fn port_versions(ports: &[SourceParagraph]) -> PortVersions {
    let mut versions = PortVersions::new();
    for port in ports {
        if let Some(previous) = versions.insert(port.name.clone(), port.version.clone()) {
            warn!(
                "Port {} is defined more than once; using version {} instead of {}",
                port.name, port.version, previous
            );
        }
    }
    versions
}
