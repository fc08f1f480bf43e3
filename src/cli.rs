//! Command line interface

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::builder::TypedValueParser;

use crate::app::RunOptions;
use crate::config::{
    COMPOSER_FILE_PATH_ENV, DEFAULT_CONCURRENCY, DEFAULT_FETCH_TIMEOUT_SECS, PACKAGIST_URL_ENV,
    SLACK_WEBHOOK_URL_ENV, ScanConfig, composer_file_path_with_env, optional_with_env,
};
use crate::version::registries::packagist::DEFAULT_PACKAGIST_URL;

#[derive(Debug, Parser)]
#[command(name = "composer-guardian")]
#[command(
    version,
    about = "Check for updates to packages in a composer.json file."
)]
pub struct Cli {
    /// Path to the composer.json file [env: COMPOSER_FILE_PATH] [default: composer.json]
    #[arg(long, value_name = "PATH")]
    pub composer_file_path: Option<PathBuf>,

    /// Slack webhook URL to send notifications to [env: SLACK_WEBHOOK_URL]
    #[arg(long, value_name = "URL")]
    pub slack_webhook_url: Option<String>,

    /// Also check packages listed under require-dev
    #[arg(long)]
    pub include_dev: bool,

    /// Additional package name to leave out (repeatable)
    #[arg(long = "exclude", value_name = "PACKAGE")]
    pub excluded_packages: Vec<String>,

    /// Additional virtual package prefix to skip, e.g. lib- (repeatable)
    #[arg(long = "skip-prefix", value_name = "PREFIX")]
    pub virtual_prefixes: Vec<String>,

    /// Seconds to wait for each registry request
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Number of registry requests in flight at once
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CONCURRENCY,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub concurrency: usize,

    /// Packagist base URL [env: PACKAGIST_URL] [default: https://packagist.org]
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Manifest path: flag, then COMPOSER_FILE_PATH, then composer.json
    pub fn composer_file_path(&self) -> PathBuf {
        composer_file_path_with_env(
            self.composer_file_path.clone(),
            env::var(COMPOSER_FILE_PATH_ENV).ok(),
        )
    }

    /// Webhook URL: flag, then SLACK_WEBHOOK_URL
    pub fn slack_webhook_url(&self) -> Option<String> {
        optional_with_env(
            self.slack_webhook_url.clone(),
            env::var(SLACK_WEBHOOK_URL_ENV).ok(),
        )
    }

    /// Registry base URL: flag, then PACKAGIST_URL, then packagist.org
    pub fn registry_url(&self) -> String {
        optional_with_env(self.registry_url.clone(), env::var(PACKAGIST_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_PACKAGIST_URL.to_string())
    }

    /// Defaults extended with the prefixes and names given on the command line
    pub fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig {
            fetch_timeout: Duration::from_secs(self.timeout),
            concurrency: self.concurrency,
            ..ScanConfig::default()
        };
        config
            .virtual_prefixes
            .extend(self.virtual_prefixes.iter().cloned());
        config
            .excluded_packages
            .extend(self.excluded_packages.iter().cloned());
        config
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            composer_file: self.composer_file_path(),
            include_dev: self.include_dev,
            scan: self.scan_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_without_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["composer-guardian"]).unwrap();

        assert_eq!(cli.composer_file_path, None);
        assert_eq!(cli.slack_webhook_url, None);
        assert!(!cli.include_dev);
        assert_eq!(cli.scan_config(), ScanConfig::default());
    }

    #[test]
    fn parse_reads_composer_file_path_and_webhook() {
        let cli = Cli::try_parse_from([
            "composer-guardian",
            "--composer-file-path",
            "/srv/app/composer.json",
            "--slack-webhook-url",
            "https://hooks.slack.com/services/T/B/X",
        ])
        .unwrap();

        assert_eq!(
            cli.composer_file_path(),
            PathBuf::from("/srv/app/composer.json")
        );
        assert_eq!(
            cli.slack_webhook_url(),
            Some("https://hooks.slack.com/services/T/B/X".to_string())
        );
    }

    #[test]
    fn scan_config_extends_default_lists() {
        let cli = Cli::try_parse_from([
            "composer-guardian",
            "--exclude",
            "composer-plugin-api",
            "--exclude",
            "composer-runtime-api",
            "--skip-prefix",
            "lib-",
            "--timeout",
            "12",
            "--concurrency",
            "4",
        ])
        .unwrap();

        let config = cli.scan_config();

        assert_eq!(config.virtual_prefixes, vec!["ext-", "lib-"]);
        assert_eq!(
            config.excluded_packages,
            vec!["php", "composer-plugin-api", "composer-runtime-api"]
        );
        assert_eq!(config.fetch_timeout, Duration::from_secs(12));
        assert_eq!(config.concurrency, 4);
    }

    #[test]
    fn parse_rejects_zero_concurrency() {
        assert!(Cli::try_parse_from(["composer-guardian", "--concurrency", "0"]).is_err());
    }

    #[test]
    fn run_options_carries_include_dev() {
        let cli = Cli::try_parse_from([
            "composer-guardian",
            "--include-dev",
            "--composer-file-path",
            "composer.json",
        ])
        .unwrap();

        let options = cli.run_options();

        assert!(options.include_dev);
        assert_eq!(options.composer_file, PathBuf::from("composer.json"));
    }
}
