//! mdchunk CLI
//!
//! Extract heading chunks and front matter from markdown files.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mdchunk_cli::{commands, Cli, MdchunkConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = MdchunkConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    let code = commands::run(cli, config).await?;
    Ok(code)
}
