//! Properties that must hold for every legal move.
//!
//! Positions are generated by playing every legal pit for a few plies from
//! the opening, for both variants.

use strictly_oware::invariants::{ConservationInvariant, Invariant};
use strictly_oware::{
    Board, GameStatus, MoveOutcome, MoveSequencer, PITS_PER_SIDE, RuleVariant, Side, SowEvent,
    TOTAL_STONES, ai_choose, apply_move, new_game,
};

type Explored = (RuleVariant, Board, Side, MoveOutcome);

/// Every (variant, before, mover, outcome) reachable within `depth` plies.
fn explore(variant: RuleVariant, depth: usize) -> Vec<Explored> {
    let mut found = Vec::new();
    let (board, side) = new_game(variant);
    let mut frontier = vec![(board, side)];

    for _ in 0..depth {
        let mut next = Vec::new();
        for (board, side) in frontier {
            for pit in 0..PITS_PER_SIDE {
                let Ok(outcome) = apply_move(&board, side, pit, variant) else {
                    continue;
                };
                if let GameStatus::AwaitingMove(to_move) = outcome.status() {
                    next.push((*outcome.board(), to_move));
                }
                found.push((variant, board, side, outcome));
            }
        }
        frontier = next;
    }
    found
}

fn all_moves() -> Vec<Explored> {
    [RuleVariant::AnanAnan, RuleVariant::Abapa]
        .into_iter()
        .flat_map(|variant| explore(variant, 3))
        .collect()
}

#[test]
fn test_conservation_holds_for_every_move() {
    let moves = all_moves();
    assert!(!moves.is_empty());
    for (_, before, _, outcome) in &moves {
        let board = outcome.board();
        assert!(<ConservationInvariant as Invariant<Board>>::holds(before));
        assert!(<ConservationInvariant as Invariant<Board>>::holds(board));
        let total = board.total_stones(Side::One)
            + u32::from(board.score(Side::One))
            + board.total_stones(Side::Two)
            + u32::from(board.score(Side::Two));
        assert_eq!(total, TOTAL_STONES);
    }
}

#[test]
fn test_sequencer_replay_matches_sown_board() {
    for (_, before, _, outcome) in all_moves() {
        let sequencer = MoveSequencer::new(before, outcome.trace().clone());
        let steps: Vec<_> = sequencer.collect();
        assert_eq!(steps.len(), outcome.trace().len());
        assert_eq!(steps.last().map(|s| s.board), Some(*outcome.board()));
    }
}

#[test]
fn test_abapa_never_captures_own_row() {
    for (variant, _, mover, outcome) in all_moves() {
        if variant != RuleVariant::Abapa {
            continue;
        }
        for (pit, capture) in outcome.trace().captures() {
            assert_ne!(pit.side(), mover, "captured own pit {pit}");
            assert_eq!(capture.credited, mover);
        }
    }
}

#[test]
fn test_source_pit_never_receives_a_stone_in_its_lap() {
    for (_, _, _, outcome) in all_moves() {
        let mut source = None;
        for event in outcome.trace() {
            match *event {
                SowEvent::Pickup { pit, .. } => source = Some(pit),
                SowEvent::Place { pit, .. } => assert_ne!(Some(pit), source),
                _ => {}
            }
        }
    }
}

#[test]
fn test_input_board_survives_dry_runs() {
    for (variant, before, mover, _) in all_moves().into_iter().take(50) {
        let copy = before;
        let _ = ai_choose(&before, mover, variant);
        assert_eq!(before, copy);
    }
}

#[test]
fn test_ai_choice_is_idempotent_and_legal() {
    for (variant, _, _, outcome) in all_moves() {
        let GameStatus::AwaitingMove(side) = outcome.status() else {
            continue;
        };
        let board = outcome.board();
        let first = ai_choose(board, side, variant);
        let second = ai_choose(board, side, variant);
        assert_eq!(first, second);

        let pit = first.expect("side to move always has stones");
        assert!(apply_move(board, side, pit, variant).is_ok());
    }
}

#[test]
fn test_moves_are_deterministic() {
    for (variant, before, mover, outcome) in all_moves().into_iter().take(100) {
        let source = outcome
            .trace()
            .events()
            .iter()
            .find_map(|e| match e {
                SowEvent::Pickup { pit, .. } => Some(pit.index()),
                _ => None,
            })
            .expect("every move starts with a pickup");
        let again = apply_move(&before, mover, source, variant)
            .expect("replayable");
        assert_eq!(again, outcome);
    }
}
