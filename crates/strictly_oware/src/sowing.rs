//! The sowing engine.
//!
//! Distribution works on a private scratch copy of the board and hands back
//! a fresh [`Board`] with the complete [`SowingTrace`]. Both variants share
//! the walk; captures and relay continuation are delegated to the variant's
//! capture policy.

use crate::action::MoveError;
use crate::board::Board;
use crate::endgame;
use crate::trace::{SowEvent, SowingTrace};
use crate::types::{Pit, RuleVariant, Side};
use tracing::{debug, instrument, warn};

/// Upper bound on relay laps within one move.
pub const MAX_RELAY_LAPS: usize = 512;

/// Sows from `acting`'s pit `pit_index`.
///
/// Turn order is not checked; that belongs to the caller.
///
/// # Errors
///
/// - [`MoveError::InvalidPit`] if `pit_index` is not in `0..6`.
/// - [`MoveError::EmptyPit`] if the pit holds no stones.
#[instrument(skip(board), fields(side = %acting, pit = pit_index, %variant))]
pub fn sow(
    board: &Board,
    acting: Side,
    pit_index: usize,
    variant: RuleVariant,
) -> Result<(Board, SowingTrace), MoveError> {
    let source = Pit::new(acting, pit_index)
        .ok_or(MoveError::InvalidPit(pit_index))?;
    if board.stones(source) == 0 {
        return Err(MoveError::EmptyPit(pit_index));
    }

    let mut scratch = *board;
    let mut trace = SowingTrace::new();
    let mut lap_source = source;
    let mut laps = 0;

    let last = loop {
        let (last, captured) = sow_lap(&mut scratch, &mut trace, acting, lap_source, variant);
        laps += 1;

        if !relays_from(&scratch, variant, acting, last, captured) {
            break last;
        }
        if laps >= MAX_RELAY_LAPS {
            warn!(laps, pit = %last, "Relay lap limit reached, ending distribution");
            break last;
        }
        debug!(lap = laps, from = %last, stones = scratch.stones(last), "Relay");
        lap_source = last;
    };

    for (pit, capture) in variant.finish_captures(&scratch, acting, last) {
        scratch.capture(pit, capture.credited);
        trace.push(SowEvent::Capture { pit, capture });
    }

    if let Some(sweep) = endgame::absorb(&mut scratch, variant, acting) {
        trace.push(sweep);
    }

    debug_assert_eq!(
        scratch.total(),
        board.total(),
        "sowing must conserve stones"
    );
    debug!(events = trace.len(), laps, "Sowing complete");
    Ok((scratch, trace))
}

/// A lap continues only from an occupied pit on the opponent's row that
/// the last stone did not capture. Ending on the mover's own row stops.
fn relays_from(
    board: &Board,
    variant: RuleVariant,
    acting: Side,
    last: Pit,
    captured: bool,
) -> bool {
    variant.relays() && !captured && last.side() != acting && board.stones(last) > 1
}

/// Picks up `source` and drops one stone per pit until the hand is empty,
/// skipping `source` itself. Returns the last pit and whether it was captured.
fn sow_lap(
    board: &mut Board,
    trace: &mut SowingTrace,
    acting: Side,
    source: Pit,
    variant: RuleVariant,
) -> (Pit, bool) {
    let mut hand = board.take(source);
    trace.push(SowEvent::Pickup {
        pit: source,
        stones: hand,
    });

    let mut cursor = source;
    let mut captured = false;
    while hand > 0 {
        cursor = cursor.next();
        if cursor == source {
            cursor = cursor.next();
        }
        hand -= 1;
        board.add_stone(cursor);

        let capture = variant.decide_capture(board, acting, cursor, hand);
        if let Some(capture) = capture {
            board.capture(cursor, capture.credited);
        }
        captured = capture.is_some();
        trace.push(SowEvent::Place {
            pit: cursor,
            capture,
        });
    }
    (cursor, captured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Capture;

    fn pit(side: Side, index: usize) -> Pit {
        Pit::new(side, index).unwrap()
    }

    #[test]
    fn test_rejects_out_of_range_pit() {
        let board = Board::initial();
        assert_eq!(
            sow(&board, Side::One, 6, RuleVariant::Abapa),
            Err(MoveError::InvalidPit(6))
        );
    }

    #[test]
    fn test_rejects_empty_pit() {
        let board = Board::from_parts([[0, 4, 4, 4, 4, 4], [4; 6]], [4, 0]);
        assert_eq!(
            sow(&board, Side::One, 0, RuleVariant::AnanAnan),
            Err(MoveError::EmptyPit(0))
        );
    }

    #[test]
    fn test_input_board_untouched() {
        let board = Board::initial();
        let copy = board;
        let (after, _) = sow(&board, Side::Two, 3, RuleVariant::Abapa).unwrap();
        assert_eq!(board, copy);
        assert_ne!(after, board);
    }

    #[test]
    fn test_abapa_single_pass_wraps_onto_opponent() {
        let board = Board::initial();
        let (after, trace) = sow(&board, Side::One, 4, RuleVariant::Abapa).unwrap();
        let landed: Vec<_> = trace.placements().collect();
        assert_eq!(
            landed,
            vec![
                pit(Side::One, 5),
                pit(Side::Two, 0),
                pit(Side::Two, 1),
                pit(Side::Two, 2),
            ]
        );
        assert_eq!(after.pits(Side::Two), &[5, 5, 5, 4, 4, 4]);
        assert_eq!(trace.laps(), 1);
    }

    #[test]
    fn test_relay_continues_from_occupied_landing() {
        let board = Board::from_parts([[4, 4, 0, 0, 0, 2], [1, 2, 0, 0, 0, 4]], [16, 15]);
        let (after, trace) = sow(&board, Side::One, 5, RuleVariant::AnanAnan).unwrap();
        // Lap 1 ends on Two-1 (2 -> 3), which was occupied: relay from there.
        // Lap 2 ends on Two-4, which was empty.
        assert_eq!(trace.laps(), 2);
        assert_eq!(after.pits(Side::Two), &[2, 0, 1, 1, 1, 4]);
        assert_eq!(after.total(), board.total());
    }

    #[test]
    fn test_occupied_own_row_landing_does_not_relay() {
        let board = Board::initial();
        let (after, trace) = sow(&board, Side::One, 0, RuleVariant::AnanAnan).unwrap();
        assert_eq!(trace.laps(), 1);
        assert_eq!(trace.placements().count(), 4);
        assert_eq!(after.pits(Side::One), &[0, 5, 5, 5, 5, 4]);
        assert_eq!(after.pits(Side::Two), &[4; 6]);
    }

    #[test]
    fn test_relay_stops_when_lap_reaches_own_row() {
        let board = Board::initial();
        let (after, trace) = sow(&board, Side::One, 2, RuleVariant::AnanAnan).unwrap();
        // Ends on Two-0 (5), relays to Two-5 (5), relays again and stops on One-4.
        assert_eq!(trace.laps(), 3);
        assert_eq!(after.pits(Side::One), &[5, 5, 1, 6, 6, 5]);
        assert_eq!(after.pits(Side::Two), &[0, 5, 5, 5, 5, 0]);
    }

    #[test]
    fn test_anan_anan_capture_on_last_stone_stops_relay() {
        let board = Board::from_parts([[3, 0, 0, 3, 4, 4], [4; 6]], [5, 5]);
        let (after, trace) = sow(&board, Side::One, 0, RuleVariant::AnanAnan).unwrap();
        assert_eq!(trace.laps(), 1);
        assert_eq!(
            trace.captures().collect::<Vec<_>>(),
            vec![(pit(Side::One, 3), Capture::new(4, Side::One))]
        );
        assert_eq!(after.pits(Side::One), &[0, 1, 1, 0, 4, 4]);
        assert_eq!(after.score(Side::One), 9);
    }

    #[test]
    fn test_large_pit_skips_source_every_lap() {
        let board = Board::from_parts([[0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 25]], [11, 12]);
        let (after, trace) = sow(&board, Side::Two, 5, RuleVariant::Abapa).unwrap();
        let source = pit(Side::Two, 5);
        assert!(trace.placements().all(|p| p != source));
        assert_eq!(trace.placements().count(), 25);
        assert_eq!(after.stones(source), 0);
        // 25 stones over 11 pits: two full rounds plus three more, ending on
        // One-2 with 3, which chains back through One-1 and One-0.
        assert_eq!(after.pits(Side::One), &[0, 0, 0, 2, 2, 2]);
        assert_eq!(after.pits(Side::Two), &[2, 2, 2, 2, 2, 0]);
        assert_eq!(after.score(Side::Two), 21);
    }

    #[test]
    fn test_abapa_records_chain_after_placements() {
        let board = Board::from_parts([[0, 0, 0, 0, 0, 2], [1, 2, 0, 0, 0, 0]], [20, 23]);
        let (after, trace) = sow(&board, Side::One, 5, RuleVariant::Abapa).unwrap();
        let captures: Vec<_> = trace.captures().collect();
        assert_eq!(
            captures,
            vec![
                (pit(Side::Two, 1), Capture::new(3, Side::One)),
                (pit(Side::Two, 0), Capture::new(2, Side::One)),
            ]
        );
        assert_eq!(after.score(Side::One), 25);
    }
}
