use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{
    package::{OutdatedPackage, StatusDatabase, find_outdated, load_all_ports, port_versions},
    runtime::Runtime,
    tool_version::{Advisory, check_marker_file},
};

use super::paths::Paths;
use super::report::DriftReport;

/// What `update` found. Finding outdated packages is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Outdated packages sorted by name.
    pub outdated: Vec<OutdatedPackage>,
    pub advisory: Option<Advisory>,
}

/// Report installed packages whose version differs from their port definition.
#[tracing::instrument(skip(runtime, install_root, running_version))]
pub fn update<R: Runtime>(
    runtime: R,
    install_root: Option<PathBuf>,
    running_version: &str,
) -> Result<UpdateSummary> {
    let paths = Paths::resolve(&runtime, install_root)?;

    println!("Using local portfile versions. To update the local portfiles, use `git pull`.");

    let status_db = StatusDatabase::load(&runtime, &paths.status_file)?;
    let report = outdated_report(&runtime, &paths, &status_db)?;

    for line in report.render() {
        println!("{}", line);
    }

    let advisory = check_marker_file(&runtime, &paths.version_file, running_version);
    if let Some(advisory) = &advisory {
        println!("{}", advisory);
    }

    Ok(UpdateSummary {
        outdated: report.into_entries(),
        advisory,
    })
}

/// Compare the port catalog under `paths` with the installed packages.
#[tracing::instrument(skip(runtime, paths, status_db))]
pub fn outdated_report<R: Runtime>(
    runtime: &R,
    paths: &Paths,
    status_db: &StatusDatabase,
) -> Result<DriftReport> {
    let ports = load_all_ports(runtime, &paths.ports)?;
    let catalog = port_versions(&ports);
    let installed = status_db.installed();
    debug!(
        "Comparing {} installed package(s) against {} port(s)",
        installed.len(),
        catalog.len()
    );

    Ok(DriftReport::new(find_outdated(&catalog, &installed)))
}
