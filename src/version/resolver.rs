//! Update resolution for a single package
//!
//! Turns the outcome of a registry fetch into either an [`UpdateRecord`]
//! carrying the latest stable release, or a reason why there is none.
//!
//! The declared version is display data only. It is never parsed or compared
//! against the latest release: as soon as the registry reports any stable
//! version, the greatest one is reported for the dependency.

use tracing::debug;

use crate::version::error::FailureKind;
use crate::version::registry::FetchOutcome;
use crate::version::stable::max_stable;
use crate::version::types::UpdateRecord;

/// Why no update record was produced for a package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoUpdateReason {
    /// The registry answered but listed no stable release
    NoStableRelease,
    /// The registry could not be queried successfully
    FetchFailed(FailureKind),
}

/// Decision for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Update(UpdateRecord),
    NoUpdate(NoUpdateReason),
}

/// Decide what to report for `name` given the registry's answer
pub fn resolve_update(name: &str, declared_version: &str, outcome: &FetchOutcome) -> Resolution {
    let versions = match outcome {
        Ok(versions) => versions,
        Err(e) => {
            debug!("No update for {}: fetch failed: {}", name, e);
            return Resolution::NoUpdate(NoUpdateReason::FetchFailed(e.kind()));
        }
    };

    let Ok(latest) = max_stable(&versions.versions) else {
        debug!(
            "No stable release among {} versions of {}",
            versions.versions.len(),
            name
        );
        return Resolution::NoUpdate(NoUpdateReason::NoStableRelease);
    };

    Resolution::Update(UpdateRecord {
        name: name.to_string(),
        declared_version: declared_version.to_string(),
        latest_version: latest.to_string(),
    })
}
