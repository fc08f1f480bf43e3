//! Registry trait for fetching package versions from a remote source

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::PackageVersions;

/// Result of asking a registry for one package's versions
pub type FetchOutcome = Result<PackageVersions, RegistryError>;

/// Trait for fetching package versions from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches every version the registry knows for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "monolog/monolog")
    ///
    /// # Returns
    /// * `Ok(PackageVersions)` - Raw version identifiers in registry order
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_all_versions(&self, package_name: &str) -> FetchOutcome;
}
