//! Capture rules for the two Oware variants.
//!
//! Each variant is a [`CapturePolicy`]. The sowing loop never inspects the
//! variant itself; it asks [`RuleVariant`] which dispatches exhaustively to
//! the matching policy, so a new rule-set cannot be half wired in.

use crate::board::Board;
use crate::trace::Capture;
use crate::types::{Pit, RuleVariant, Side};
use tracing::{debug, instrument};

/// Count that triggers an Anan-Anan capture.
pub const ANAN_ANAN_CAPTURE_COUNT: u8 = 4;

/// Capture decisions consulted by the sowing loop.
pub trait CapturePolicy {
    /// Called after every single-stone placement with the board as it now
    /// stands. `hand` is the number of stones still to be sown in this lap.
    fn on_place(board: &Board, acting: Side, landed: Pit, hand: u8) -> Option<Capture>;

    /// Called once distribution is over, with the pit the last stone hit.
    /// Returns captures in the order they are taken.
    fn on_finish(board: &Board, acting: Side, last: Pit) -> Vec<(Pit, Capture)>;

    /// Whether a lap ending on an occupied pit continues from there.
    fn relays() -> bool;
}

/// Anan-Anan: any pit reaching exactly four is captured on the spot.
pub struct AnanAnanRules;

impl CapturePolicy for AnanAnanRules {
    fn on_place(board: &Board, acting: Side, landed: Pit, hand: u8) -> Option<Capture> {
        let stones = board.stones(landed);
        if stones != ANAN_ANAN_CAPTURE_COUNT {
            return None;
        }

        // Last stone of the lap goes to the mover; otherwise the row being sown through.
        let credited = if hand == 0 { acting } else { landed.side() };
        debug!(pit = %landed, %credited, hand, "Pit reached four");
        Some(Capture::new(stones, credited))
    }

    fn on_finish(_board: &Board, _acting: Side, _last: Pit) -> Vec<(Pit, Capture)> {
        Vec::new()
    }

    fn relays() -> bool {
        true
    }
}

/// Abapa: 2s and 3s on the opponent's row, chained backward from the last stone.
pub struct AbapaRules;

impl AbapaRules {
    fn capturable(stones: u8) -> bool {
        matches!(stones, 2 | 3)
    }
}

impl CapturePolicy for AbapaRules {
    fn on_place(_board: &Board, _acting: Side, _landed: Pit, _hand: u8) -> Option<Capture> {
        None
    }

    fn on_finish(board: &Board, acting: Side, last: Pit) -> Vec<(Pit, Capture)> {
        let mut captures = Vec::new();
        if last.side() == acting {
            return captures;
        }

        let mut cursor = Some(last);
        while let Some(pit) = cursor {
            let stones = board.stones(pit);
            if !Self::capturable(stones) {
                break;
            }
            captures.push((pit, Capture::new(stones, acting)));
            cursor = pit.previous_in_row();
        }

        if !captures.is_empty() {
            debug!(
                from = %last,
                pits = captures.len(),
                stones = captures.iter().map(|(_, c)| u32::from(c.stones)).sum::<u32>(),
                "Abapa capture chain"
            );
        }
        captures
    }

    fn relays() -> bool {
        false
    }
}

impl RuleVariant {
    /// Per-placement capture hook for this variant.
    #[instrument(skip(board), level = "trace")]
    pub fn decide_capture(
        self,
        board: &Board,
        acting: Side,
        landed: Pit,
        hand: u8,
    ) -> Option<Capture> {
        match self {
            RuleVariant::AnanAnan => AnanAnanRules::on_place(board, acting, landed, hand),
            RuleVariant::Abapa => AbapaRules::on_place(board, acting, landed, hand),
        }
    }

    /// End-of-distribution captures for this variant.
    #[instrument(skip(board), level = "trace")]
    pub fn finish_captures(self, board: &Board, acting: Side, last: Pit) -> Vec<(Pit, Capture)> {
        match self {
            RuleVariant::AnanAnan => AnanAnanRules::on_finish(board, acting, last),
            RuleVariant::Abapa => AbapaRules::on_finish(board, acting, last),
        }
    }

    /// Whether this variant sows relay laps.
    pub fn relays(self) -> bool {
        match self {
            RuleVariant::AnanAnan => AnanAnanRules::relays(),
            RuleVariant::Abapa => AbapaRules::relays(),
        }
    }
}
