//! Rendering of outdated packages for the `update` command.

use crate::package::OutdatedPackage;

pub const NO_UPDATES: &str = "No packages need updating.";
pub const HEADER: &str = "The following packages differ from their port versions:";

const NAME_WIDTH: usize = 32;

/// Outdated packages in display order.
///
/// Entries are sorted by package name. Packages sharing a name are ordered by
/// triplet so the output does not depend on status database order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftReport {
    entries: Vec<OutdatedPackage>,
}

impl DriftReport {
    pub fn new(mut entries: Vec<OutdatedPackage>) -> Self {
        entries.sort_by(|a, b| {
            a.spec
                .name()
                .cmp(b.spec.name())
                .then_with(|| a.spec.triplet().cmp(&b.spec.triplet()))
        });
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[OutdatedPackage] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<OutdatedPackage> {
        self.entries
    }

    /// One aligned row per outdated package.
    pub fn rows(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "    {:<width$} {}",
                    entry.spec.display_name(),
                    entry.version_diff,
                    width = NAME_WIDTH
                )
            })
            .collect()
    }

    /// The full report, including the remediation hint.
    pub fn render(&self) -> Vec<String> {
        if self.is_empty() {
            return vec![NO_UPDATES.to_string()];
        }

        let mut lines = vec![HEADER.to_string()];
        lines.extend(self.rows());
        lines.extend(
            [
                "",
                "To update these packages, run",
                "    portup remove --outdated",
                "    portup install <pkgs>...",
            ]
            .map(String::from),
        );
        lines
    }
}
