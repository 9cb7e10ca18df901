use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{
    package::{InstalledRecord, StatusDatabase},
    runtime::Runtime,
};

use super::paths::Paths;

/// List all installed packages
#[tracing::instrument(skip(runtime, install_root))]
pub fn list<R: Runtime>(runtime: R, install_root: Option<PathBuf>) -> Result<()> {
    let paths = Paths::resolve(&runtime, install_root)?;
    let status_db = StatusDatabase::load(&runtime, &paths.status_file)?;

    let lines = list_lines(status_db.installed());
    if lines.is_empty() {
        println!("No packages installed.");
        return Ok(());
    }

    debug!("Found {} package(s)", lines.len());
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

fn list_lines(mut installed: Vec<InstalledRecord>) -> Vec<String> {
    installed.sort_by(|a, b| a.spec.cmp(&b.spec));
    installed
        .iter()
        .map(|record| format!("{} {}", record.spec, record.version))
        .collect()
}
