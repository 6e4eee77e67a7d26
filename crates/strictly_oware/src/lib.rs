//! Strictly Oware - sowing-and-capture game engine
//!
//! Pure game logic for the Mancala-family game Oware, with two capture
//! rule-sets (Anan-Anan and Abapa), a greedy AI opponent and replayable
//! move traces for animation.
//!
//! # Architecture
//!
//! - **Board**: twelve pits and two scores, a plain `Copy` value
//! - **Sowing**: distribution with wraparound and relay laps
//! - **Capture**: per-variant capture policy
//! - **Endgame**: termination and winner
//! - **Sequencer**: step-by-step replay of a move's trace
//! - **AI**: single-ply greedy pit choice
//! - **Session**: authoritative state of one game
//!
//! # Example
//!
//! ```
//! use strictly_oware::{apply_move, new_game, GameStatus, RuleVariant, Side};
//!
//! let (board, side) = new_game(RuleVariant::AnanAnan);
//! let outcome = apply_move(&board, side, 0, RuleVariant::AnanAnan).unwrap();
//! assert_eq!(outcome.status(), GameStatus::AwaitingMove(Side::Two));
//! assert_eq!(outcome.board().pits(Side::One), &[0, 5, 5, 5, 5, 4]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod ai;
mod board;
mod capture;
mod config;
mod endgame;
mod game;
mod sequencer;
mod session;
mod sowing;
mod trace;
mod types;

pub mod invariants;

// Crate-level exports - Domain types
pub use action::{Move, MoveError};
pub use board::{Board, BoardError};
pub use trace::{Capture, SowEvent, SowingTrace};
pub use types::{
    GameStatus, INITIAL_STONES_PER_PIT, PITS_PER_SIDE, Pit, RING_SIZE, RuleVariant, Side,
    TOTAL_STONES,
};

// Crate-level exports - Rules
pub use capture::{ANAN_ANAN_CAPTURE_COUNT, AbapaRules, AnanAnanRules, CapturePolicy};
pub use endgame::{ABAPA_WINNING_SCORE, ABSORPTION_THRESHOLD, evaluate, is_over};
pub use sowing::{MAX_RELAY_LAPS, sow};

// Crate-level exports - Engine entry points
pub use ai::choose_move;
pub use game::{MoveOutcome, ai_choose, apply_move, new_game};

// Crate-level exports - Playback and sessions
pub use sequencer::{DEFAULT_STEP_INTERVAL, MoveSequencer, PlaybackStep};
pub use session::{GameSession, SessionError};

// Crate-level exports - Configuration
pub use config::{ConfigError, OwareConfig, PlaybackSettings};
