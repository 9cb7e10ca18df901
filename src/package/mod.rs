//! Package management module
//!
//! This module provides the port catalog, the installed status database,
//! and the comparison between the two that finds outdated packages.

mod catalog;
mod outdated;
mod paragraph;
mod spec;
mod status;
mod version;

pub use catalog::{CONTROL_FILE, PortVersions, SourceParagraph, load_all_ports, port_versions};
pub use outdated::{OutdatedPackage, find_outdated};
pub use paragraph::{Paragraph, parse_paragraphs};
pub use spec::PackageSpec;
pub use status::{InstallState, InstalledRecord, StatusDatabase, StatusParagraph, Want};
pub use version::{Version, VersionDiff};
