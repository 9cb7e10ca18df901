use log::debug;

use super::{InstalledRecord, PackageSpec, PortVersions, VersionDiff};

/// An installed package whose version differs from its port definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedPackage {
    pub spec: PackageSpec,
    pub version_diff: VersionDiff,
}

/// Match installed packages against the port catalog by name.
///
/// Packages without a port definition were not installed from a port and are
/// skipped, as are packages whose version equals the port version. The result
/// keeps the order of `installed`.
pub fn find_outdated(catalog: &PortVersions, installed: &[InstalledRecord]) -> Vec<OutdatedPackage> {
    installed
        .iter()
        .filter_map(|record| {
            let Some(available) = catalog.get(record.spec.name()) else {
                debug!("{} has no port definition, skipping", record.spec);
                return None;
            };
            if *available == record.version {
                return None;
            }
            Some(OutdatedPackage {
                spec: record.spec.clone(),
                version_diff: VersionDiff::new(record.version.clone(), available.clone()),
            })
        })
        .collect()
}
