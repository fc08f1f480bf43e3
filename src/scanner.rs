//! Dependency scan over the manifest
//!
//! Applies the skip policy to every declared dependency, fetches the rest
//! from the registry under a timeout and resolves each answer into an
//! update record or a notice. A failing package never aborts the scan.

use std::fmt;
use std::sync::Arc;

use futures::stream::{self, Stream, StreamExt};
use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::parser::types::Dependency;
use crate::version::error::{FailureKind, RegistryError};
use crate::version::registry::{FetchOutcome, Registry};
use crate::version::resolver::{NoUpdateReason, Resolution, resolve_update};
use crate::version::types::UpdateRecord;

/// One-line message about a package that produced no update record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanNotice {
    /// Name starts with a virtual/platform prefix
    Skipped { name: String },
    /// Name is in the excluded set
    Excluded { name: String },
    /// Registry listed no stable release
    NoStableRelease { name: String },
    /// Registry fetch failed
    FetchFailed { name: String, kind: FailureKind },
}

impl fmt::Display for ScanNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanNotice::Skipped { name } => write!(f, "Skipping package '{name}'..."),
            ScanNotice::Excluded { name } => write!(f, "Excluding package '{name}'..."),
            ScanNotice::NoStableRelease { name } => {
                write!(f, "No stable release found for package '{name}'. Skipping...")
            }
            ScanNotice::FetchFailed { name, kind } => match kind {
                FailureKind::NotFound => {
                    write!(f, "Error: Package '{name}' not found. Skipping...")
                }
                FailureKind::Timeout => write!(
                    f,
                    "Error: Timeout occurred while fetching data for package '{name}'. Skipping..."
                ),
                FailureKind::Parse | FailureKind::Other => write!(
                    f,
                    "Error: Unable to fetch data for package '{name}'. Skipping..."
                ),
            },
        }
    }
}

/// Result of scanning every declared dependency
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Update records in manifest order
    pub updates: Vec<UpdateRecord>,
    /// Notices in manifest order
    pub notices: Vec<ScanNotice>,
}

impl ScanReport {
    pub fn push(&mut self, entry: ScanEntry) {
        match entry {
            ScanEntry::Update(record) => self.updates.push(record),
            ScanEntry::Notice(notice) => self.notices.push(notice),
        }
    }
}

/// Outcome for one declared dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEntry {
    Update(UpdateRecord),
    Notice(ScanNotice),
}

/// Walks the declared dependencies and resolves each against the registry
pub struct DependencyScanner {
    registry: Arc<dyn Registry>,
    config: ScanConfig,
}

impl DependencyScanner {
    pub fn new(registry: Arc<dyn Registry>, config: ScanConfig) -> Self {
        Self { registry, config }
    }

    /// Skip policy, first match wins: virtual prefix, then excluded name
    pub fn skip_notice(&self, name: &str) -> Option<ScanNotice> {
        if self
            .config
            .virtual_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
        {
            return Some(ScanNotice::Skipped {
                name: name.to_string(),
            });
        }

        if self.config.excluded_packages.iter().any(|p| p == name) {
            return Some(ScanNotice::Excluded {
                name: name.to_string(),
            });
        }

        None
    }

    /// Entries in manifest order, each yielded as soon as it and every
    /// earlier entry have resolved.
    ///
    /// Up to `concurrency` fetches run at once.
    pub fn entries<'a>(
        &'a self,
        dependencies: &'a [Dependency],
    ) -> impl Stream<Item = ScanEntry> + 'a {
        stream::iter(dependencies)
            .map(move |dep| self.scan_one(dep))
            .buffered(self.config.concurrency.max(1))
    }

    /// Scan all dependencies and collect the entries into a report
    pub async fn scan(&self, dependencies: &[Dependency]) -> ScanReport {
        let entries: Vec<ScanEntry> = self.entries(dependencies).collect().await;

        let mut report = ScanReport::default();
        for entry in entries {
            report.push(entry);
        }

        info!(
            "Scanned {} dependencies: {} updates, {} notices",
            dependencies.len(),
            report.updates.len(),
            report.notices.len()
        );

        report
    }

    async fn scan_one(&self, dependency: &Dependency) -> ScanEntry {
        if let Some(notice) = self.skip_notice(&dependency.name) {
            debug!("{}", notice);
            return ScanEntry::Notice(notice);
        }

        let outcome = self.fetch_with_timeout(&dependency.name).await;

        match resolve_update(&dependency.name, &dependency.declared_version, &outcome) {
            Resolution::Update(record) => {
                debug!(
                    "Latest stable release of {} is {}",
                    record.name, record.latest_version
                );
                ScanEntry::Update(record)
            }
            Resolution::NoUpdate(NoUpdateReason::NoStableRelease) => {
                ScanEntry::Notice(ScanNotice::NoStableRelease {
                    name: dependency.name.clone(),
                })
            }
            Resolution::NoUpdate(NoUpdateReason::FetchFailed(kind)) => {
                ScanEntry::Notice(ScanNotice::FetchFailed {
                    name: dependency.name.clone(),
                    kind,
                })
            }
        }
    }

    async fn fetch_with_timeout(&self, package_name: &str) -> FetchOutcome {
        let fetch = self.registry.fetch_all_versions(package_name);

        match tokio::time::timeout(self.config.fetch_timeout, fetch).await {
            Ok(outcome) => outcome.inspect_err(|e| {
                debug!("Failed to fetch versions for {}: {}", package_name, e)
            }),
            Err(_) => {
                debug!(
                    "Fetching {} exceeded {:?}, giving up",
                    package_name, self.config.fetch_timeout
                );
                Err(RegistryError::Timeout(package_name.to_string()))
            }
        }
    }
}
