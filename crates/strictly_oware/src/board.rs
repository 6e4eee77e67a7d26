//! Twelve-pit Oware board.

use crate::trace::SowEvent;
use crate::types::{INITIAL_STONES_PER_PIT, PITS_PER_SIDE, Pit, Side, TOTAL_STONES};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Pit contents and capture scores for both sides.
///
/// Boards are plain values. Every move produces a new `Board`; the one
/// passed in is never modified.
///
/// A deserialized board may hold at most [`TOTAL_STONES`] stones counting
/// both scores; anything larger is rejected with [`BoardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Stones per pit, indexed by side then row index.
    pits: [[u8; PITS_PER_SIDE]; 2],
    /// Captured stones per side.
    scores: [u8; 2],
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    pits: [[u8; PITS_PER_SIDE]; 2],
    scores: [u8; 2],
}

/// A received board that legal play cannot produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Board holds {} stones, more than the {} in play", _0, TOTAL_STONES)]
pub struct BoardError(pub u32);

impl std::error::Error for BoardError {}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let board = Board::from_parts(raw.pits, raw.scores);
        match board.total() {
            total if total > TOTAL_STONES => Err(BoardError(total)),
            _ => Ok(board),
        }
    }
}

impl Board {
    /// Starting position: four stones in every pit, both scores zero.
    #[instrument]
    pub fn initial() -> Self {
        Self {
            pits: [[INITIAL_STONES_PER_PIT; PITS_PER_SIDE]; 2],
            scores: [0; 2],
        }
    }

    /// Builds a board from raw rows and scores, `[One, Two]` order.
    ///
    /// Intended for fixtures. Nothing is checked here; a board holding more
    /// than [`TOTAL_STONES`] in total is outside what the engine plays, and
    /// pit or score counts saturate at `u8::MAX` rather than wrap.
    pub fn from_parts(pits: [[u8; PITS_PER_SIDE]; 2], scores: [u8; 2]) -> Self {
        Self { pits, scores }
    }

    /// Stones in a single pit.
    pub fn stones(&self, pit: Pit) -> u8 {
        self.pits[pit.side().index()][pit.index()]
    }

    /// A side's row, index 0 first.
    pub fn pits(&self, side: Side) -> &[u8; PITS_PER_SIDE] {
        &self.pits[side.index()]
    }

    /// Captured stones credited to a side.
    pub fn score(&self, side: Side) -> u8 {
        self.scores[side.index()]
    }

    /// Stones remaining on a side's row.
    pub fn total_stones(&self, side: Side) -> u32 {
        self.pits(side).iter().map(|&n| u32::from(n)).sum()
    }

    /// Returns true if every pit on the side's row is empty.
    pub fn is_empty(&self, side: Side) -> bool {
        self.pits(side).iter().all(|&n| n == 0)
    }

    /// Stones remaining across all twelve pits.
    pub fn stones_on_board(&self) -> u32 {
        self.total_stones(Side::One) + self.total_stones(Side::Two)
    }

    /// Stones on the board plus both scores.
    pub fn total(&self) -> u32 {
        self.stones_on_board() + u32::from(self.scores[0]) + u32::from(self.scores[1])
    }

    /// Empties a pit, returning what it held.
    pub(crate) fn take(&mut self, pit: Pit) -> u8 {
        std::mem::take(&mut self.pits[pit.side().index()][pit.index()])
    }

    /// Drops one stone into a pit, returning the new count.
    pub(crate) fn add_stone(&mut self, pit: Pit) -> u8 {
        let slot = &mut self.pits[pit.side().index()][pit.index()];
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Moves a whole pit into `credited`'s score.
    pub(crate) fn capture(&mut self, pit: Pit, credited: Side) -> u8 {
        let stones = self.take(pit);
        let score = &mut self.scores[credited.index()];
        *score = score.saturating_add(stones);
        stones
    }

    /// Clears every pit into `credited`'s score, returning the total moved.
    pub(crate) fn sweep(&mut self, credited: Side) -> u8 {
        let mut swept: u8 = 0;
        for row in &mut self.pits {
            for slot in row.iter_mut() {
                swept = swept.saturating_add(std::mem::take(slot));
            }
        }
        let score = &mut self.scores[credited.index()];
        *score = score.saturating_add(swept);
        swept
    }

    /// Applies one recorded event. Replays only; no rule is evaluated here.
    pub(crate) fn apply_event(&mut self, event: &SowEvent) {
        match *event {
            SowEvent::Pickup { pit, stones } => {
                let taken = self.take(pit);
                debug_assert_eq!(taken, stones, "pickup at {pit} disagrees with board");
            }
            SowEvent::Place { pit, capture } => {
                self.add_stone(pit);
                if let Some(capture) = capture {
                    self.capture(pit, capture.credited);
                }
            }
            SowEvent::Capture { pit, capture } => {
                self.capture(pit, capture.credited);
            }
            SowEvent::Sweep { credited, .. } => {
                self.sweep(credited);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    /// Side Two's row is printed right-to-left above side One so the
    /// ring reads counter-clockwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Two |")?;
        for stones in self.pits(Side::Two).iter().rev() {
            write!(f, "{:>3}", stones)?;
        }
        writeln!(f, " | score {}", self.score(Side::Two))?;
        write!(f, "One |")?;
        for stones in self.pits(Side::One) {
            write!(f, "{:>3}", stones)?;
        }
        write!(f, " | score {}", self.score(Side::One))
    }
}
