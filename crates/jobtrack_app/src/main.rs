mod cli;
mod commands;
mod config;
mod logging;
mod render;
mod session;

use std::io;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use jobtrack_logging::jobtrack_info;
use jobtrack_storage::{FileSlot, PersistenceAdapter};

use cli::Cli;
use session::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    logging::initialize(config.log_destination, config.log_level, &config.data_dir);
    jobtrack_info!("Starting jobtrack with data dir {:?}", config.data_dir);

    let slot = FileSlot::new(&config.data_dir, &config.storage_key)
        .with_context(|| format!("invalid storage key {:?}", config.storage_key))?;
    let mut session = Session::start(PersistenceAdapter::new(slot));

    let stdin = io::stdin();
    let stdout = io::stdout();
    commands::execute(
        &mut session,
        cli.command,
        now_ms,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

fn now_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
