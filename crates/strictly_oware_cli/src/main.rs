//! Strictly Oware - headless harness
//!
//! Runs the engine without any UI: AI-vs-AI self-play and move-list replay.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_oware::{GameSession, Move, OwareConfig, Side};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Selfplay { max_moves, animate } => run_selfplay(&config, max_moves, animate),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Reads the config file (if any) and applies command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<OwareConfig> {
    let config = match &cli.config {
        Some(path) => OwareConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => OwareConfig::default(),
    };
    Ok(match cli.variant {
        Some(variant) => config.with_variant(variant),
        None => config,
    })
}

/// Plays the AI against itself.
#[instrument(skip(config), fields(variant = %config.variant()))]
fn run_selfplay(config: &OwareConfig, max_moves: usize, animate: bool) -> Result<()> {
    let mut session = GameSession::from_config(config);
    info!("Starting self-play");

    while !session.is_over() && session.history().len() < max_moves {
        let outcome = session.play_ai_turn()?;
        let last = session
            .history()
            .last()
            .copied()
            .context("move was not recorded")?;
        info!(
            move_number = session.history().len(),
            side = %last.side,
            pit = last.pit,
            captures = outcome.trace().captures().count(),
            "Move played"
        );

        if animate {
            if let Some(playback) = session.take_playback() {
                let interval = playback.interval();
                for step in playback {
                    std::thread::sleep(interval);
                    debug!(index = step.index, event = ?step.event, "Step");
                }
            }
        }
    }

    if !session.is_over() {
        warn!(max_moves, "Move limit reached before the game ended");
    }
    println!("{}", session.board());
    println!("{}", session.status());
    Ok(())
}

/// Applies `pits` alternately for One and Two from the opening position.
#[instrument(skip(config), fields(variant = %config.variant()))]
fn run_replay(config: &OwareConfig, pits: &[usize], json: bool) -> Result<()> {
    let mut session = GameSession::from_config(config);
    let mut side = Side::One;
    let mut last = None;

    for (n, &pit) in pits.iter().enumerate() {
        let outcome = session
            .make_move(side, pit)
            .with_context(|| format!("move {} ({})", n + 1, Move::new(side, pit)))?;
        side = outcome.next_side();
        last = Some(outcome);
    }
    session.cancel_playback();

    match (json, last) {
        (true, Some(outcome)) => println!("{}", serde_json::to_string_pretty(&outcome)?),
        _ => {
            println!("{}", session.board());
            println!("{}", session.status());
        }
    }
    Ok(())
}
