//! Common types for the manifest parser

/// A dependency declared in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name (e.g., "guzzlehttp/guzzle", "ext-json", "php")
    pub name: String,
    /// Constraint string as written in the manifest (e.g., "^7.0"), never parsed
    pub declared_version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, declared_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_version: declared_version.into(),
        }
    }
}
