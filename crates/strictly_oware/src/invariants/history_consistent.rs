//! History consistency invariant: the board is what the history produces.

use super::Invariant;
use crate::game::apply_move;
use crate::session::GameSession;

/// Invariant: replaying the move history from the starting board yields
/// the session's current board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut board = *session.opening_board();
        for mov in session.history() {
            match apply_move(&board, mov.side, mov.pit, session.variant()) {
                Ok(outcome) => board = *outcome.board(),
                Err(_) => return false,
            }
        }
        board == *session.board()
    }

    fn description() -> &'static str {
        "Replaying the move history reproduces the board"
    }
}
