use anyhow::Result;
use std::fmt;

/// Identity of a package: its name plus the optional triplet it was built for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageSpec {
    name: String,
    triplet: Option<String>,
}

impl PackageSpec {
    pub fn new(name: impl Into<String>, triplet: Option<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            anyhow::bail!("Package name must not be empty");
        }
        let triplet = triplet.filter(|t| !t.trim().is_empty());
        Ok(Self { name, triplet })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triplet(&self) -> Option<&str> {
        self.triplet.as_deref()
    }

    /// Name shown to users, `name:triplet` when a triplet is known.
    pub fn display_name(&self) -> String {
        match &self.triplet {
            Some(triplet) => format!("{}:{}", self.name, triplet),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
