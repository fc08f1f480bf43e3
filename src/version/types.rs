//! Common types for the version layer

/// Versions reported by a registry for a single package.
///
/// Order is whatever the registry returned; nothing is sorted or filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageVersions {
    pub versions: Vec<String>,
}

impl PackageVersions {
    pub fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// The latest stable release found for a declared dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    pub name: String,
    pub declared_version: String,
    pub latest_version: String,
}
