//! Engine entry points used by the surrounding application.

use crate::action::MoveError;
use crate::ai;
use crate::board::Board;
use crate::endgame;
use crate::sowing::sow;
use crate::trace::SowingTrace;
use crate::types::{GameStatus, RuleVariant, Side};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Everything a caller needs after a move was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    board: Board,
    trace: SowingTrace,
    next_side: Side,
    status: GameStatus,
}

impl MoveOutcome {
    /// Board after the move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Events the move produced, in order.
    pub fn trace(&self) -> &SowingTrace {
        &self.trace
    }

    /// Side to move next; unchanged if the game just ended.
    pub fn next_side(&self) -> Side {
        self.next_side
    }

    /// Game status after the move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Splits the outcome into its board and trace.
    pub fn into_parts(self) -> (Board, SowingTrace) {
        (self.board, self.trace)
    }
}

/// Starting board and the side that opens (always One).
#[instrument]
pub fn new_game(variant: RuleVariant) -> (Board, Side) {
    info!(%variant, "New game");
    (Board::initial(), Side::One)
}

/// Plays `side`'s pit `pit_index` and evaluates the result.
///
/// # Errors
///
/// Returns [`MoveError`] if the pit is out of range or empty.
#[instrument(skip(board))]
pub fn apply_move(
    board: &Board,
    side: Side,
    pit_index: usize,
    variant: RuleVariant,
) -> Result<MoveOutcome, MoveError> {
    let (after, trace) = sow(board, side, pit_index, variant)?;
    let status = endgame::evaluate(&after, variant, side);
    let next_side = match status {
        GameStatus::AwaitingMove(next) => next,
        GameStatus::Won(_) | GameStatus::Drawn => side,
    };

    Ok(MoveOutcome {
        board: after,
        trace,
        next_side,
        status,
    })
}

/// The AI's pit for `side`, or `None` if it has no stones.
#[instrument(skip(board))]
pub fn ai_choose(board: &Board, side: Side, variant: RuleVariant) -> Option<usize> {
    ai::choose_move(board, side, variant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_opens_with_side_one() {
        let (board, side) = new_game(RuleVariant::Abapa);
        assert_eq!(board, Board::initial());
        assert_eq!(side, Side::One);
    }

    #[test]
    fn test_turn_passes_after_move() {
        let (board, side) = new_game(RuleVariant::AnanAnan);
        let outcome = apply_move(&board, side, 0, RuleVariant::AnanAnan).unwrap();
        assert_eq!(outcome.next_side(), Side::Two);
        assert_eq!(outcome.status(), GameStatus::AwaitingMove(Side::Two));
    }

    #[test]
    fn test_turn_stays_when_game_ends() {
        let board = Board::from_parts([[0, 0, 0, 0, 0, 2], [1, 2, 0, 0, 0, 0]], [20, 23]);
        let outcome = apply_move(&board, Side::One, 5, RuleVariant::Abapa)
            .unwrap();
        assert_eq!(outcome.status(), GameStatus::Won(Side::One));
        assert_eq!(outcome.next_side(), Side::One);
    }

    #[test]
    fn test_errors_pass_through() {
        let (board, _) = new_game(RuleVariant::Abapa);
        assert_eq!(
            apply_move(&board, Side::One, 9, RuleVariant::Abapa),
            Err(MoveError::InvalidPit(9))
        );
    }
}
