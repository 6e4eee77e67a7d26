//! Game session: the authoritative state of one game.
//!
//! A session owns the current board, the rule variant and the side to move.
//! Callers serialize access to it (one move at a time); the engine itself
//! does no locking.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::config::OwareConfig;
use crate::endgame;
use crate::game::{MoveOutcome, ai_choose, apply_move, new_game};
use crate::invariants::assert_session_invariants;
use crate::sequencer::{DEFAULT_STEP_INTERVAL, MoveSequencer};
use crate::types::{GameStatus, RuleVariant, Side};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Error from a session-level move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// The requesting side is not the side to move.
    #[display("It's not side {}'s turn", _0)]
    NotYourTurn(Side),

    /// The engine rejected the move.
    #[display("Invalid move: {}", _0)]
    Move(MoveError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(err) => Some(err),
            SessionError::GameOver | SessionError::NotYourTurn(_) => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

/// One game in progress (or finished).
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    variant: RuleVariant,
    to_move: Side,
    status: GameStatus,
    opening: (Board, Side),
    step_interval: Duration,
    playback: Option<MoveSequencer>,
}

impl GameSession {
    /// Creates a session at the standard starting position.
    #[instrument]
    pub fn new(variant: RuleVariant) -> Self {
        let (board, first) = new_game(variant);
        Self::with_board(board, variant, first)
    }

    /// Creates a session from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &OwareConfig) -> Self {
        let interval = config.playback().step_interval();
        Self::new(*config.variant()).with_step_interval(interval)
    }

    /// Creates a session from an arbitrary position.
    #[instrument(skip(board))]
    pub fn with_board(board: Board, variant: RuleVariant, to_move: Side) -> Self {
        let status = if endgame::is_over(&board, variant) {
            endgame::evaluate(&board, variant, to_move.opponent())
        } else {
            GameStatus::AwaitingMove(to_move)
        };
        Self {
            board,
            history: Vec::new(),
            variant,
            to_move,
            status,
            opening: (board, to_move),
            step_interval: DEFAULT_STEP_INTERVAL,
            playback: None,
        }
    }

    /// Sets the pause between animated events for future moves.
    pub fn with_step_interval(mut self, interval: Duration) -> Self {
        self.step_interval = interval;
        self
    }

    /// Rebuilds a session by replaying `moves` from the starting position.
    ///
    /// # Errors
    ///
    /// Returns the first [`SessionError`] a move produces.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(variant: RuleVariant, moves: &[Move]) -> Result<Self, SessionError> {
        let mut session = Self::new(variant);
        for mov in moves {
            session.make_move(mov.side, mov.pit)?;
        }
        session.cancel_playback();
        Ok(session)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rule variant for this game.
    pub fn variant(&self) -> RuleVariant {
        self.variant
    }

    /// Side to move (the last mover once the game is over).
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Winner, if the game ended with one.
    pub fn winner(&self) -> Option<Side> {
        self.status.winner()
    }

    /// Board the session started from.
    pub fn opening_board(&self) -> &Board {
        &self.opening.0
    }

    /// Side that moved first.
    pub fn opening_side(&self) -> Side {
        self.opening.1
    }

    /// Plays a move for `side`.
    ///
    /// Any animation still running for the previous move is dropped and
    /// replaced by playback of this one.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] if the game has ended.
    /// - [`SessionError::NotYourTurn`] if `side` is not to move.
    /// - [`SessionError::Move`] if the engine rejects the pit.
    #[instrument(
        skip(self),
        fields(variant = %self.variant, moves = self.history.len())
    )]
    pub fn make_move(&mut self, side: Side, pit: usize) -> Result<MoveOutcome, SessionError> {
        if self.is_over() {
            warn!(%side, pit, "Move attempted after game over");
            return Err(SessionError::GameOver);
        }
        if side != self.to_move {
            warn!(%side, expected = %self.to_move, "Side tried to move out of turn");
            return Err(SessionError::NotYourTurn(side));
        }

        let outcome = apply_move(&self.board, side, pit, self.variant).map_err(|e| {
            warn!(%side, pit, error = %e, "Invalid move");
            SessionError::from(e)
        })?;

        self.cancel_playback();
        self.playback = Some(MoveSequencer::with_interval(
            self.board,
            outcome.trace().clone(),
            self.step_interval,
        ));

        self.board = *outcome.board();
        self.to_move = outcome.next_side();
        self.status = outcome.status();
        self.history.push(Move::new(side, pit));
        assert_session_invariants(self);

        if self.is_over() {
            info!(
                status = %self.status,
                one = self.board.score(Side::One),
                two = self.board.score(Side::Two),
                moves = self.history.len(),
                "Game finished"
            );
        } else {
            debug!(%side, pit, events = outcome.trace().len(), "Move applied");
        }

        Ok(outcome)
    }

    /// Lets the AI pick and play for the side to move.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] if the game has ended or no pit can move.
    #[instrument(skip(self))]
    pub fn play_ai_turn(&mut self) -> Result<MoveOutcome, SessionError> {
        if self.is_over() {
            return Err(SessionError::GameOver);
        }
        let side = self.to_move;
        let pit = ai_choose(&self.board, side, self.variant)
            .ok_or(SessionError::GameOver)?;
        debug!(%side, pit, "AI chose pit");
        self.make_move(side, pit)
    }

    /// Animation of the latest move, if it has not been discarded.
    pub fn playback_mut(&mut self) -> Option<&mut MoveSequencer> {
        self.playback.as_mut()
    }

    /// Takes ownership of the latest move's animation.
    pub fn take_playback(&mut self) -> Option<MoveSequencer> {
        self.playback.take()
    }

    /// Drops any in-flight animation. The board is already authoritative.
    pub fn cancel_playback(&mut self) {
        if let Some(previous) = self.playback.take() {
            if !previous.is_finished() {
                debug!(
                    remaining = previous.remaining(),
                    "Discarding in-flight playback"
                );
            }
        }
    }

    /// Starts over from the standard position with the same variant.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(variant = %self.variant, "Resetting session");
        self.cancel_playback();
        let interval = self.step_interval;
        *self = Self::new(self.variant).with_step_interval(interval);
    }
}
