//! Registry test utilities

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use composer_guardian::version::error::RegistryError;
use composer_guardian::version::registry::{FetchOutcome, Registry};
use composer_guardian::version::types::PackageVersions;

/// Mock registry for testing
///
/// Unknown packages answer `NotFound`. Every requested name is recorded.
#[derive(Default)]
pub struct MockRegistry {
    versions: HashMap<String, Vec<String>>,
    requested: Mutex<Vec<String>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(mut self, package: &str, versions: Vec<&str>) -> Self {
        self.versions.insert(
            package.to_string(),
            versions.into_iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    /// Package names fetched so far, in request order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_all_versions(&self, package_name: &str) -> FetchOutcome {
        self.requested
            .lock()
            .unwrap()
            .push(package_name.to_string());

        match self.versions.get(package_name) {
            Some(versions) => Ok(PackageVersions::new(versions.clone())),
            None => Err(RegistryError::NotFound(package_name.to_string())),
        }
    }
}

/// Write a composer.json into a fresh temp dir
pub fn write_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("composer.json");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}
