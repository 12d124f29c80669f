mod cli;
mod snapshot;

use anyhow::Result;
use clap::Parser;

use aurora_engine::logging::{init_logging, LoggingConfig};
use aurora_ui::Application;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    };
    init_logging(logging);

    if let Some(path) = &cli.snapshot {
        return snapshot::write_png(path, cli.snapshot_width, cli.snapshot_height, cli.snapshot_time);
    }

    let result = Application::new()
        .title(cli.title)
        .size(cli.width, cli.height)
        .run();

    if let Err(e) = &result {
        log::error!("aurora runtime error: {e:#}");
        log::info!("no usable GPU surface? `--snapshot <PNG>` renders the background on the CPU");
    }
    result
}
