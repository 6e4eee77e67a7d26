//! First-class move types for Oware.

use crate::types::{PITS_PER_SIDE, Side};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move: a side sowing from one of its pits.
///
/// Moves are recorded in session history and can be replayed to rebuild
/// a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Row index (0-5) of the pit sown from.
    pub pit: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} sows pit {}", self.side, self.pit)
    }
}

/// Rejected move. Both cases are bad client input; the board is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveError {
    /// Pit index outside `0..6`.
    #[display("Pit {} is out of range (must be 0-{})", _0, PITS_PER_SIDE - 1)]
    InvalidPit(usize),

    /// The chosen pit holds no stones.
    #[display("Pit {} is empty", _0)]
    EmptyPit(usize),
}

impl std::error::Error for MoveError {}
