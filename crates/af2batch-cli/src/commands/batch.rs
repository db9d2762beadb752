use crate::cli::BatchArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use af2batch::engine::progress::ProgressReporter;
use af2batch::engine::runner::SystemRunner;
use af2batch::workflows::dispatch::{self, BatchReport};
use tracing::{debug, info};

pub fn run(args: BatchArgs) -> Result<BatchReport> {
    info!("Building dispatch configuration...");
    let config = config::build_config(&args)?;
    debug!("Final dispatch configuration: {:?}", &config);

    if config.dry_run {
        info!("Dry run: commands will be printed but not executed.");
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the dispatch workflow...");
    let report = dispatch::run(&config, &SystemRunner, &reporter)?;

    info!(
        "Dispatch workflow finished over {} task(s).",
        report.total()
    );
    Ok(report)
}
