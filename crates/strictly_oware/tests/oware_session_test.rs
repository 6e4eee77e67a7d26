//! Session lifecycle tests: whole games, playback and serialization.

use strictly_oware::invariants::{InvariantSet, SessionInvariants};
use strictly_oware::{
    Board, GameSession, GameStatus, Move, MoveOutcome, MoveSequencer, OwareConfig, RuleVariant,
    SessionError, Side, SowingTrace, TOTAL_STONES, apply_move,
};

const MOVE_LIMIT: usize = 300;

fn play_out(variant: RuleVariant) -> GameSession {
    let mut session = GameSession::new(variant);
    while !session.is_over() && session.history().len() < MOVE_LIMIT {
        let before = *session.board();
        let outcome = session.play_ai_turn().expect("AI always has a move");

        assert_eq!(session.board().total(), TOTAL_STONES);
        let replayed = MoveSequencer::new(before, outcome.trace().clone()).finish();
        assert_eq!(replayed, *session.board());
    }
    session
}

#[test]
fn test_ai_self_play_anan_anan() {
    let session = play_out(RuleVariant::AnanAnan);
    assert!(SessionInvariants::check_all(&session).is_ok());
    if session.is_over() {
        let board = session.board();
        assert!(board.is_empty(Side::One) || board.is_empty(Side::Two));
    }
}

#[test]
fn test_ai_self_play_abapa() {
    let session = play_out(RuleVariant::Abapa);
    assert!(SessionInvariants::check_all(&session).is_ok());
    if let GameStatus::Won(side) = session.status() {
        let board = session.board();
        assert!(board.score(side) > board.score(side.opponent()));
    }
}

#[test]
fn test_self_play_is_reproducible() {
    let first = play_out(RuleVariant::AnanAnan);
    let second = play_out(RuleVariant::AnanAnan);
    assert_eq!(first.history(), second.history());
    assert_eq!(first.board(), second.board());
}

#[test]
fn test_replay_from_history() {
    let moves = vec![
        Move::new(Side::One, 0),
        Move::new(Side::Two, 2),
        Move::new(Side::One, 5),
        Move::new(Side::Two, 0),
    ];
    let session = GameSession::replay(RuleVariant::Abapa, &moves)
        .expect("Valid replay");
    assert_eq!(session.history(), moves.as_slice());
    assert_eq!(session.to_move(), Side::One);
    assert!(session.status() == GameStatus::AwaitingMove(Side::One));
}

#[test]
fn test_replay_stops_at_bad_move() {
    let moves = vec![Move::new(Side::One, 0), Move::new(Side::One, 1)];
    let result = GameSession::replay(RuleVariant::Abapa, &moves);
    assert!(matches!(result, Err(SessionError::NotYourTurn(Side::One))));
}

#[test]
fn test_playback_is_cancelled_by_reset() {
    let config = OwareConfig::default().with_step_millis(10);
    let mut session = GameSession::from_config(&config);
    session.make_move(Side::One, 3).expect("Valid move");

    let playback = session.playback_mut().expect("playback started");
    assert_eq!(playback.interval().as_millis(), 10);
    playback.next();

    session.reset();
    assert!(session.playback_mut().is_none());
    assert_eq!(*session.board(), Board::initial());
}

#[test]
fn test_outcome_serializes_as_plain_data() {
    let mut session = GameSession::new(RuleVariant::AnanAnan);
    let outcome = session.make_move(Side::One, 0).expect("Valid move");

    let json = serde_json::to_value(&outcome).expect("serializable");
    assert_eq!(json["status"]["AwaitingMove"], "Two");
    assert_eq!(json["next_side"], "Two");
    assert_eq!(json["trace"][0]["kind"], "pickup");
    assert_eq!(json["trace"][1]["kind"], "place");
    assert_eq!(json["board"]["pits"][0][1], 5);

    let back: MoveOutcome = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, outcome);
}

#[test]
fn test_received_trace_with_bad_pit_is_rejected() {
    let json = r#"[{"kind":"place","pit":{"side":"One","index":9},"capture":null}]"#;
    let err = serde_json::from_str::<SowingTrace>(json).unwrap_err();
    assert!(err.to_string().contains("out of range"));

    let board = Board::initial();
    let outcome = apply_move(&board, Side::One, 2, RuleVariant::AnanAnan)
        .expect("Valid move");
    let json = serde_json::to_string(outcome.trace())
        .expect("serializable");
    let received: SowingTrace = serde_json::from_str(&json).expect("deserializable");
    let replayed = MoveSequencer::new(board, received).finish();
    assert_eq!(replayed, *outcome.board());
}
