//! Greedy single-ply opponent.

use crate::board::Board;
use crate::sowing::sow;
use crate::types::{RuleVariant, Side};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy)]
struct Candidate {
    pit: usize,
    gain: i32,
    stones: u8,
}

impl Candidate {
    /// Ordering key: score gain first, then the larger pit.
    fn key(&self) -> (i32, u8) {
        (self.gain, self.stones)
    }
}

/// Picks the pit that gains `side` the most score this move.
///
/// Every non-empty pit is dry-run on its own copy of the board. Ties go to
/// the pit holding more stones, then to the lower index. Returns `None`
/// if `side` has no stones.
#[instrument(skip(board), fields(%side, %variant))]
pub fn choose_move(board: &Board, side: Side, variant: RuleVariant) -> Option<usize> {
    let before = i32::from(board.score(side));
    let mut best: Option<Candidate> = None;

    for (pit, &stones) in board.pits(side).iter().enumerate() {
        if stones == 0 {
            continue;
        }
        let Ok((after, _)) = sow(board, side, pit, variant) else {
            continue;
        };
        let candidate = Candidate {
            pit,
            gain: i32::from(after.score(side)) - before,
            stones,
        };
        debug!(pit, gain = candidate.gain, stones, "Evaluated candidate");

        best = match best {
            Some(current) if current.key() >= candidate.key() => Some(current),
            _ => Some(candidate),
        };
    }

    debug!(choice = ?best.map(|c| c.pit), "AI choice");
    best.map(|c| c.pit)
}
