//! Playback of a sowing trace for animation.
//!
//! The sequencer owns no game rules. It applies recorded events one at a
//! time to a copy of the pre-move board, so the last board it yields is the
//! board `sow` already returned.

use crate::board::Board;
use crate::trace::{SowEvent, SowingTrace};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Default pause between two animated events.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(250);

/// One released event with the board as it stands after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackStep {
    /// Position of the event within the trace.
    pub index: usize,
    /// When to show this step, measured from the start of playback.
    pub offset: Duration,
    /// The event being shown.
    pub event: SowEvent,
    /// Board after applying the event.
    pub board: Board,
}

/// Forward-only cursor over a move's events.
///
/// Cannot be rewound; build a new one from the same trace to replay again.
#[derive(Debug, Clone)]
pub struct MoveSequencer {
    board: Board,
    events: std::vec::IntoIter<SowEvent>,
    released: usize,
    interval: Duration,
}

impl MoveSequencer {
    /// Starts playback of `trace` from the board the move was made on.
    #[instrument(skip(before, trace), fields(events = trace.len()))]
    pub fn new(before: Board, trace: SowingTrace) -> Self {
        Self::with_interval(before, trace, DEFAULT_STEP_INTERVAL)
    }

    /// Starts playback with a custom pause between events.
    pub fn with_interval(before: Board, trace: SowingTrace, interval: Duration) -> Self {
        Self {
            board: before,
            events: trace.into_iter(),
            released: 0,
            interval,
        }
    }

    /// Board after the events released so far.
    pub fn current(&self) -> &Board {
        &self.board
    }

    /// Events not yet released.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }

    /// Events already released.
    pub fn released(&self) -> usize {
        self.released
    }

    /// Returns true once every event has been released.
    pub fn is_finished(&self) -> bool {
        self.events.len() == 0
    }

    /// Pause between consecutive events.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Skips the rest of playback and returns the final board.
    #[instrument(skip(self), fields(remaining = self.remaining()))]
    pub fn finish(mut self) -> Board {
        for event in self.events.by_ref() {
            self.board.apply_event(&event);
        }
        debug!("Playback fast-forwarded");
        self.board
    }
}

impl Iterator for MoveSequencer {
    type Item = PlaybackStep;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.events.next()?;
        self.board.apply_event(&event);
        let index = self.released;
        self.released += 1;
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        let offset = self.interval.saturating_mul(steps);
        Some(PlaybackStep {
            index,
            offset,
            event,
            board: self.board,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.events.size_hint()
    }
}

impl ExactSizeIterator for MoveSequencer {}
