//! Alternating turn invariant: sides take turns, starting with the opener.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: the history alternates sides and `to_move` follows from it.
///
/// Oware has no extra turns, so every recorded move belongs to the side
/// opposite the one before it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        let Some(first) = history.first() else {
            return session.to_move() == session.opening_side();
        };

        if first.side != session.opening_side() {
            return false;
        }
        if history.windows(2).any(|w| w[0].side == w[1].side) {
            return false;
        }

        // A finished game keeps the last mover as `to_move`.
        let last = history[history.len() - 1].side;
        if session.is_over() {
            session.to_move() == last
        } else {
            session.to_move() == last.opponent()
        }
    }

    fn description() -> &'static str {
        "Sides alternate turns starting with the opening side"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::types::{RuleVariant, Side};

    #[test]
    fn test_empty_session_holds() {
        let session = GameSession::new(RuleVariant::Abapa);
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_moves_hold() {
        let mut session = GameSession::new(RuleVariant::Abapa);
        session.make_move(Side::One, 1).unwrap();
        session.make_move(Side::Two, 1).unwrap();
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_doubled_move_violates() {
        let mut session = GameSession::new(RuleVariant::Abapa);
        session.make_move(Side::One, 1).unwrap();
        session.history.push(Move::new(Side::One, 2));
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
