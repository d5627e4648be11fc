use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};
use vidnotes_core::config::{self, AppConfig, ConfigError};

mod app;
mod ui;

#[derive(Parser)]
#[command(name = "vidnotes", version)]
#[command(about = "Generate notes from YouTube links or local video files")]
struct Cli {
    /// Config file (defaults to <config dir>/vidnotes/config.toml)
    #[arg(long, env = "VIDNOTES_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "vidnotes_core=trace"
    #[arg(long)]
    log_level: Option<String>,

    /// Simulated processing delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

/// Builds the log filter, falling back to `info` when `level` does not parse.
/// The rejection is returned so it can be logged once tracing is up.
fn log_filter(level: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err.to_string())),
    }
}

fn init_tracing(level: &str) {
    let (env_filter, rejected) = log_filter(level);
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(error) = rejected {
        tracing::warn!(filter = level, %error, "invalid log filter, using info");
    }
}

/// Applies command line overrides on top of the loaded config and re-validates.
fn apply_overrides(config: &mut AppConfig, cli: &Cli) -> Result<(), ConfigError> {
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.submission.delay_ms = delay_ms;
    }
    config.validate()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref()).context("loading config")?;
    apply_overrides(&mut config, &cli).context("validating command line overrides")?;

    init_tracing(&config.logging.level);
    tracing::info!(
        delay_ms = config.submission.delay_ms,
        max_upload_mb = config.submission.max_upload_mb,
        "starting vidnotes"
    );

    app::run(config).context("running desktop app")?;
    Ok(())
}
