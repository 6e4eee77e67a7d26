//! Command-line interface for the Oware harness.

use clap::{Parser, Subcommand};
use strictly_oware::RuleVariant;

/// Strictly Oware - headless engine harness
#[derive(Parser, Debug)]
#[command(name = "oware")]
#[command(about = "Self-play and replay harness for the Oware engine")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Rule variant (anan-anan or abapa); overrides the config file
    #[arg(long, global = true)]
    pub variant: Option<RuleVariant>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the AI against itself until the game ends
    Selfplay {
        /// Stop after this many moves even if the game is not over
        #[arg(long, default_value = "400")]
        max_moves: usize,

        /// Pace each move's events using the configured step interval
        #[arg(long)]
        animate: bool,
    },

    /// Apply a comma-separated list of pits, sides alternating from One
    Replay {
        /// Pit indices (0-5), e.g. 0,3,5
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the last move's outcome as JSON instead of the board
        #[arg(long)]
        json: bool,
    },
}
