use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use timesheet_core::Config;
use tracing_subscriber::EnvFilter;

fn filter(config: &Config) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.logging.level)
        .with_context(|| format!("Invalid log filter '{}'", config.logging.level))
}

/// The TUI owns the terminal, so its log goes to a file.
pub fn init_file(config: &Config) -> Result<()> {
    let filter = filter(config)?;
    let Some(path) = config.log_file() else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::sink).init();
        return Ok(());
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Could not create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

pub fn init_stderr(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
