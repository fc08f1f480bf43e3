//! One run of the tool: load, scan, report, notify

use std::io::{self, Write};
use std::path::PathBuf;
use std::pin::pin;
use std::sync::Arc;

use futures::StreamExt;
use thiserror::Error;
use tracing::{error, info};

use crate::config::ScanConfig;
use crate::parser::composer_json::{ManifestError, load_manifest};
use crate::report::slack::Notifier;
use crate::report::table::{BANNER, render_table};
use crate::scanner::{DependencyScanner, ScanEntry, ScanReport};
use crate::version::registry::Registry;

/// Fatal errors; everything per-package is reported as a notice instead
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Settings for a single run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub composer_file: PathBuf,
    pub include_dev: bool,
    pub scan: ScanConfig,
}

/// Load the manifest, scan it and write the report to `out`.
///
/// The manifest is loaded before anything is written, so a fatal error
/// leaves `out` empty. Notices are written as their packages resolve. When
/// `notifier` is set and updates exist, the report is delivered once; a
/// delivery failure is printed but not returned.
pub async fn run<W: Write>(
    options: &RunOptions,
    registry: Arc<dyn Registry>,
    notifier: Option<&dyn Notifier>,
    out: &mut W,
) -> Result<ScanReport, AppError> {
    let manifest = load_manifest(&options.composer_file)?;
    let dependencies = manifest.dependencies(options.include_dev);
    info!(
        "Checking {} dependencies from {:?}",
        dependencies.len(),
        options.composer_file
    );

    writeln!(out, "{BANNER}")?;

    let scanner = DependencyScanner::new(registry, options.scan.clone());
    let mut entries = pin!(scanner.entries(&dependencies));
    let mut report = ScanReport::default();

    while let Some(entry) = entries.next().await {
        if let ScanEntry::Notice(notice) = &entry {
            writeln!(out, "{notice}")?;
            out.flush()?;
        }
        report.push(entry);
    }

    info!(
        "Scanned {} dependencies: {} updates, {} notices",
        dependencies.len(),
        report.updates.len(),
        report.notices.len()
    );

    if report.updates.is_empty() {
        writeln!(out, "\nNo package updates found.")?;
        return Ok(report);
    }

    writeln!(out, "\nComposer Guardian found package updates!\n")?;
    writeln!(out, "{}", render_table(&report.updates))?;

    match notifier {
        Some(notifier) => {
            if let Err(e) = notifier.notify(&report.updates).await {
                error!("Slack notification failed: {}", e);
                writeln!(
                    out,
                    "\nError: Unable to send Slack webhook notification. {e}"
                )?;
            }
        }
        None => writeln!(
            out,
            "\nSkipping Slack notification. Neither --slack-webhook-url argument nor SLACK_WEBHOOK_URL environment variable was provided."
        )?,
    }

    Ok(report)
}
