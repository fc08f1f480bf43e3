//! Packagist registry client for fetching Composer package versions

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::registry::{FetchOutcome, Registry};
use crate::version::types::PackageVersions;

/// Default base URL for the Packagist API
pub const DEFAULT_PACKAGIST_URL: &str = "https://packagist.org";

/// Packagist registry client
pub struct PackagistRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl Default for PackagistRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGIST_URL)
    }
}

impl PackagistRegistry {
    /// Creates a new PackagistRegistry with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("composer-guardian/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Response from `/packages/{name}.json`
#[derive(Debug, Deserialize)]
struct PackagistResponse {
    package: PackagistPackage,
}

#[derive(Debug, Deserialize)]
struct PackagistPackage {
    versions: PackagistVersions,
}

/// Keyed by version string; the per-version metadata is not needed.
///
/// Packagist encodes a package without versions as `[]` instead of `{}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackagistVersions {
    Map(IndexMap<String, IgnoredAny>),
    List(Vec<IgnoredAny>),
}

impl PackagistVersions {
    fn into_versions(self) -> Result<Vec<String>, RegistryError> {
        match self {
            PackagistVersions::Map(map) => Ok(map.into_keys().collect()),
            PackagistVersions::List(list) if list.is_empty() => Ok(Vec::new()),
            PackagistVersions::List(list) => Err(RegistryError::Parse(format!(
                "expected versions keyed by name, got a list of {}",
                list.len()
            ))),
        }
    }
}

#[async_trait]
impl Registry for PackagistRegistry {
    async fn fetch_all_versions(&self, package_name: &str) -> FetchOutcome {
        let url = format!("{}/packages/{}.json", self.base_url, package_name);
        debug!("Fetching Packagist package: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !response.status().is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "Packagist API returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let packagist_response: PackagistResponse =
            serde_json::from_str(&body).map_err(|e| RegistryError::Parse(e.to_string()))?;

        let versions = packagist_response.package.versions.into_versions()?;

        debug!(
            "Found {} versions for package {}",
            versions.len(),
            package_name
        );

        Ok(PackageVersions::new(versions))
    }
}
