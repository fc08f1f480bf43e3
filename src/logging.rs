//! Diagnostic logging to stderr

use tracing_subscriber::EnvFilter;

use crate::config::LOG_FILTER_ENV;

/// Install the global subscriber.
///
/// The filter comes from `COMPOSER_GUARDIAN_LOG` when set, otherwise `warn`
/// (`debug` with `verbose`). Report output is written to stdout separately.
pub fn init_logging(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
