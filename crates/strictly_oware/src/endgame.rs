//! End-of-game detection.

use crate::board::Board;
use crate::trace::SowEvent;
use crate::types::{GameStatus, RuleVariant, Side, TOTAL_STONES};
use tracing::{debug, instrument};

/// Anan-Anan ends once this many stones or fewer remain on the board.
pub const ABSORPTION_THRESHOLD: u32 = 8;

/// Abapa ends once either score exceeds half the stones in play.
pub const ABAPA_WINNING_SCORE: u32 = TOTAL_STONES / 2 + 1;

/// Returns true if `board` is terminal under `variant`.
pub fn is_over(board: &Board, variant: RuleVariant) -> bool {
    if board.is_empty(Side::One) || board.is_empty(Side::Two) {
        return true;
    }
    match variant {
        RuleVariant::AnanAnan => board.stones_on_board() <= ABSORPTION_THRESHOLD,
        RuleVariant::Abapa => {
            u32::from(board.score(Side::One)) >= ABAPA_WINNING_SCORE
                || u32::from(board.score(Side::Two)) >= ABAPA_WINNING_SCORE
        }
    }
}

/// Decides the game status after `last_mover` has moved.
#[instrument(
    skip(board),
    fields(one = board.score(Side::One), two = board.score(Side::Two))
)]
pub fn evaluate(board: &Board, variant: RuleVariant, last_mover: Side) -> GameStatus {
    if !is_over(board, variant) {
        return GameStatus::AwaitingMove(last_mover.opponent());
    }

    let one = board.score(Side::One);
    let two = board.score(Side::Two);
    let status = match one.cmp(&two) {
        std::cmp::Ordering::Greater => GameStatus::Won(Side::One),
        std::cmp::Ordering::Less => GameStatus::Won(Side::Two),
        std::cmp::Ordering::Equal => GameStatus::Drawn,
    };
    debug!(?status, "Game over");
    status
}

/// Anan-Anan absorption: with few enough stones left, the mover takes them all.
///
/// Applied to the scratch board at the end of a move; returns the sweep
/// event when it fires. An already empty board is left alone: there is
/// nothing to sweep, and the empty-row rule ends the game.
pub(crate) fn absorb(
    board: &mut Board,
    variant: RuleVariant,
    last_mover: Side,
) -> Option<SowEvent> {
    if variant != RuleVariant::AnanAnan {
        return None;
    }
    let remaining = board.stones_on_board();
    if remaining == 0 || remaining > ABSORPTION_THRESHOLD {
        return None;
    }

    let stones = board.sweep(last_mover);
    debug!(stones, credited = %last_mover, "Absorbing remaining stones");
    Some(SowEvent::Sweep {
        credited: last_mover,
        stones,
    })
}
