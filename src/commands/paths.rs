use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Locations of everything portup reads under its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub root: PathBuf,
    /// `<root>/ports`
    pub ports: PathBuf,
    /// `<root>/installed/status`
    pub status_file: PathBuf,
    /// `<root>/toolsrc/VERSION.txt`
    pub version_file: PathBuf,
}

impl Paths {
    pub fn new(root: PathBuf) -> Self {
        Self {
            ports: root.join("ports"),
            status_file: root.join("installed").join("status"),
            version_file: root.join("toolsrc").join("VERSION.txt"),
            root,
        }
    }

    /// Use `root` when given, otherwise the default root.
    #[tracing::instrument(skip(runtime, root))]
    pub fn resolve<R: Runtime>(runtime: &R, root: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(path) => path,
            None => default_root(runtime)?,
        };
        debug!("Using root: {:?}", root);
        Ok(Self::new(root))
    }
}

/// Get the default root directory, `<home>/.portup`
#[tracing::instrument(skip(runtime))]
pub fn default_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let home_dir = runtime
        .home_dir()
        .context("Could not find home directory")?;
    Ok(home_dir.join(".portup"))
}
