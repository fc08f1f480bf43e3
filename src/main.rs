use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use composer_guardian::app::run;
use composer_guardian::cli::Cli;
use composer_guardian::logging::init_logging;
use composer_guardian::report::{Notifier, SlackNotifier};
use composer_guardian::version::registries::PackagistRegistry;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    let registry = Arc::new(PackagistRegistry::new(&cli.registry_url()));
    let notifier = cli.slack_webhook_url().map(SlackNotifier::new);
    let options = cli.run_options();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run(
        &options,
        registry,
        notifier.as_ref().map(|n| n as &dyn Notifier),
        &mut io::stdout().lock(),
    ));

    match result {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
