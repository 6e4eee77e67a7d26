//! Conservation invariant: no stone is ever created or destroyed.

use super::Invariant;
use crate::board::Board;
use crate::session::GameSession;
use crate::types::TOTAL_STONES;

/// Invariant: pits plus scores always add up to the 48 stones dealt at start.
pub struct ConservationInvariant;

impl Invariant<Board> for ConservationInvariant {
    fn holds(board: &Board) -> bool {
        board.total() == TOTAL_STONES
    }

    fn description() -> &'static str {
        "Stones on the board plus both scores total 48"
    }
}

impl Invariant<GameSession> for ConservationInvariant {
    fn holds(session: &GameSession) -> bool {
        <Self as Invariant<Board>>::holds(session.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
