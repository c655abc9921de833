//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_engine::Intent;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply intents to a fresh game and print the result
    Replay {
        /// Intents in order: play:<cell>, jump:<step> or toggle
        intents: Vec<Intent>,

        /// Print the projection as JSON
        #[arg(long)]
        json: bool,
    },
}
