use anyhow::{Context, Result};
use clap::Parser;
use resume_portal::cli::{handle_command, Cli};
use resume_portal::core::ConfigManager;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true) // Clear file on startup
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(file)
                        .with_current_span(false)
                        .with_span_list(false),
                )
                .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }
        None => {
            // stdout carries command output
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigManager::load(cli.config.as_deref())?
        .with_api_url(cli.api_url)?
        .with_output_dir(cli.output_dir);

    init_logging(config.client.log_file.as_deref())?;

    info!("Environment: {}", config.environment);
    info!("API: {}", config.client.api_base_url);
    info!("Output: {}", config.client.output_dir.display());

    handle_command(cli.command, config).await
}
