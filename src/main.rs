//! Study planner CLI entry point.

use anyhow::Result;
use clap::Parser;
use planner::cli::{commands, Cli, Commands, TerminalInput};
use planner::config::Settings;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let settings = Settings::load_from(config_path.as_ref())?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("planner={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Execute command
    match &cli.command {
        None => {
            std::fs::create_dir_all(settings.output_dir())?;
            let mut input = TerminalInput::stdin();
            commands::run_interactive(&mut input, &settings).await?;
        }

        Some(Commands::Config { action }) => {
            commands::run_config(action, settings, config_path)?;
        }
    }

    Ok(())
}
