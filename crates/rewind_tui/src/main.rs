//! Rewind - tic-tac-toe with move history and time-travel.
//!
//! Runs the terminal game by default; `replay` applies scripted intents
//! and prints the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config_path = TuiConfig::resolve_path(cli.config.as_deref());
    // The subscriber's filter comes from the config, so logging starts after it loads.
    let config = TuiConfig::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Command::Play);

    match &command {
        Command::Play => logging::init_file(&config)?,
        Command::Replay { .. } => logging::init_stderr(&config),
    }
    info!(
        path = ?config_path,
        log_file = %config.log_file().display(),
        log_filter = %config.log_filter(),
        "Config loaded"
    );

    match command {
        Command::Play => tui::run(&config),
        Command::Replay { intents, json } => replay::run(&intents, json),
    }
}
