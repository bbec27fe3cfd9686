//! Noughts - unified CLI
//!
//! Play tic-tac-toe in the terminal or let the computer play itself.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::AppConfig;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play {
            mode,
            seed,
            delay_ms,
        } => run_play(config.with_overrides(mode, seed, delay_ms)).await,
        Command::Simulate { games, seed } => {
            run_simulate(games, seed.or(*config.seed()).unwrap_or_else(rand::random))
        }
    }
}

/// Run the terminal UI
async fn run_play(config: AppConfig) -> Result<()> {
    init_file_logging(config.log_file())?;
    noughts::tui::run_tui(&config).await
}

/// Run headless self-play and print the tally
fn run_simulate(games: u32, seed: u64) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(games, seed, "Starting self-play");
    let report = noughts::simulate(games, seed).context("Self-play failed")?;
    println!("{}", report);
    Ok(())
}

/// Setup logging to file to avoid interfering with the TUI
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
