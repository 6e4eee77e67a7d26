//! Core domain types for Oware.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Pits owned by each side.
pub const PITS_PER_SIDE: usize = 6;

/// Total positions on the sowing ring.
pub const RING_SIZE: usize = PITS_PER_SIDE * 2;

/// Stones placed in every pit at game start.
pub const INITIAL_STONES_PER_PIT: u8 = 4;

/// Stones in play for a whole game (4 stones × 12 pits).
pub const TOTAL_STONES: u32 = INITIAL_STONES_PER_PIT as u32 * RING_SIZE as u32;

/// One of the two players, each owning a row of six pits.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Side {
    /// Side One (always moves first).
    One,
    /// Side Two.
    Two,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Row index used for board storage.
    pub(crate) fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// All six pits of this side, in row order.
    pub fn pits(self) -> impl Iterator<Item = Pit> {
        (0..PITS_PER_SIDE)
            .map(move |index| Pit { side: self, index })
    }
}

/// A single pit, addressed by owning side and row index (0-5).
///
/// Deserialization goes through [`Pit::new`], so a received index outside
/// the row is rejected instead of reaching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPit")]
pub struct Pit {
    side: Side,
    index: usize,
}

/// Unchecked wire form of [`Pit`].
#[derive(Deserialize)]
struct RawPit {
    side: Side,
    index: usize,
}

impl TryFrom<RawPit> for Pit {
    type Error = MoveError;

    fn try_from(raw: RawPit) -> Result<Self, Self::Error> {
        Pit::new(raw.side, raw.index)
            .ok_or(MoveError::InvalidPit(raw.index))
    }
}

impl Pit {
    /// Creates a pit address, or `None` if `index` is outside `0..6`.
    #[instrument]
    pub fn new(side: Side, index: usize) -> Option<Self> {
        (index < PITS_PER_SIDE).then_some(Self { side, index })
    }

    /// Owning side.
    pub fn side(self) -> Side {
        self.side
    }

    /// Index within the owning side's row.
    pub fn index(self) -> usize {
        self.index
    }

    /// Position on the twelve-pit ring: side One occupies 0-5, side Two 6-11.
    pub fn ring_position(self) -> usize {
        self.side.index() * PITS_PER_SIDE + self.index
    }

    /// The pit at a ring position (taken modulo the ring size).
    pub fn from_ring_position(position: usize) -> Self {
        let position = position % RING_SIZE;
        let side = if position < PITS_PER_SIDE {
            Side::One
        } else {
            Side::Two
        };
        Self {
            side,
            index: position % PITS_PER_SIDE,
        }
    }

    /// The next pit counter-clockwise.
    pub fn next(self) -> Self {
        Self::from_ring_position(self.ring_position() + 1)
    }

    /// The neighbouring pit toward index 0 on the same row, if any.
    pub fn previous_in_row(self) -> Option<Self> {
        self.index.checked_sub(1).map(|index| Self {
            side: self.side,
            index,
        })
    }
}

impl std::fmt::Display for Pit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.side, self.index)
    }
}

/// Capture rule-set, fixed for the lifetime of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RuleVariant {
    /// Capture every pit that reaches four; relay sowing.
    #[default]
    AnanAnan,
    /// Capture 2s and 3s on the opponent's row; single pass.
    Abapa,
}

/// Where a game stands after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game continues; the given side moves next.
    AwaitingMove(Side),
    /// Game ended with a winner.
    Won(Side),
    /// Game ended with equal scores.
    Drawn,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::AwaitingMove(side) => write!(f, "Side {} to move", side),
            GameStatus::Won(side) => write!(f, "Side {} wins", side),
            GameStatus::Drawn => write!(f, "Draw"),
        }
    }
}
