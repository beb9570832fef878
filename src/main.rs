use termwrap::app;
use termwrap::config::load_config;

use anyhow::Result;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command line arguments and load configuration
    let config = load_config()?;

    // Logs go to stderr so they never mix with wrapped output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_ascii_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    info!(inputs = config.inputs.len(), "termwrap starting");

    app::run(&config)?;

    Ok(())
}
