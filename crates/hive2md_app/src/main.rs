mod cli;

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use hive2md_engine::{Archiver, FetchSettings, LogSink};
use hive2md_logging::{archive_error, archive_info};

use crate::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    hive2md_logging::initialize(args.log_level(), args.log_destination());

    let config = args.run_config();

    // One thread; every request is awaited in turn.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let summary = runtime.block_on(async {
        let archiver = Archiver::connect(&config, FetchSettings::default(), Arc::new(LogSink))
            .with_context(|| format!("invalid node {}", config.node_url()))?;
        let today = Utc::now().date_naive();
        archiver
            .run(&config, today)
            .await
            .with_context(|| format!("archiving @{} failed", config.account))
    });
    let summary = match summary {
        Ok(summary) => summary,
        Err(err) => {
            // With --quiet the terminal logger is off; the file still gets the cause.
            archive_error!("{err:#}");
            return Err(err);
        }
    };

    archive_info!(
        "Done: {} of {} entries saved, {} skipped, {} images saved, {} images failed",
        summary.saved.len(),
        summary.fetched,
        summary.skipped,
        summary.images_saved,
        summary.images_failed
    );
    Ok(())
}
