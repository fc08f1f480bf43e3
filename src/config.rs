use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Defaults
// =============================================================================

/// Manifest read when neither the flag nor the environment names one
pub const DEFAULT_COMPOSER_FILE: &str = "composer.json";

/// Timeout for a single registry fetch in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Number of registry fetches in flight at once (1 = strictly sequential)
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Name prefixes of virtual/platform packages that have no registry entry
pub const DEFAULT_VIRTUAL_PREFIXES: &[&str] = &["ext-"];

/// Package names never looked up in the registry
pub const DEFAULT_EXCLUDED_PACKAGES: &[&str] = &["php"];

// =============================================================================
// Environment variables
// =============================================================================

pub const COMPOSER_FILE_PATH_ENV: &str = "COMPOSER_FILE_PATH";
pub const SLACK_WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";
pub const PACKAGIST_URL_ENV: &str = "PACKAGIST_URL";
pub const LOG_FILTER_ENV: &str = "COMPOSER_GUARDIAN_LOG";

/// Dependency scan configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Entries whose name starts with one of these are skipped
    pub virtual_prefixes: Vec<String>,
    /// Entries with exactly one of these names are excluded
    pub excluded_packages: Vec<String>,
    /// Upper bound for one registry fetch
    pub fetch_timeout: Duration,
    /// Maximum number of fetches in flight
    pub concurrency: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            virtual_prefixes: DEFAULT_VIRTUAL_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_packages: DEFAULT_EXCLUDED_PACKAGES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Resolve the manifest path: flag, then environment, then `composer.json`.
pub fn composer_file_path_with_env(flag: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    flag.or_else(|| non_empty(env_value).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPOSER_FILE))
}

/// Resolve an optional setting: flag, then environment.
pub fn optional_with_env(flag: Option<String>, env_value: Option<String>) -> Option<String> {
    flag.or_else(|| non_empty(env_value))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
