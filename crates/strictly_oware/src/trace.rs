//! Sowing traces: the ordered record of what one move did.
//!
//! A trace is fully materialized before anyone sees it. Presentation code
//! replays it through [`crate::MoveSequencer`] and never re-derives rules.

use crate::types::{Pit, Side};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Stones removed from a pit and credited to a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Capture {
    /// Number of stones captured.
    pub stones: u8,
    /// Side whose score receives them.
    pub credited: Side,
}

/// One atomic step of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SowEvent {
    /// A pit was emptied into the hand (move source or relay pickup).
    Pickup {
        /// The emptied pit.
        pit: Pit,
        /// Stones picked up.
        stones: u8,
    },
    /// One stone was dropped into a pit.
    Place {
        /// The receiving pit.
        pit: Pit,
        /// Set when this placement triggered a capture of the pit.
        capture: Option<Capture>,
    },
    /// A pit was captured after distribution ended.
    Capture {
        /// The captured pit.
        pit: Pit,
        /// What was captured and for whom.
        capture: Capture,
    },
    /// Every pit was cleared into one side's score.
    Sweep {
        /// Side receiving the remaining stones.
        credited: Side,
        /// Stones swept off the board.
        stones: u8,
    },
}

impl SowEvent {
    /// The capture carried by this event, if any.
    pub fn capture(&self) -> Option<Capture> {
        match *self {
            SowEvent::Place { capture, .. } => capture,
            SowEvent::Capture { capture, .. } => Some(capture),
            SowEvent::Pickup { .. } | SowEvent::Sweep { .. } => None,
        }
    }

    /// The pit this event touched; `None` for a sweep.
    pub fn pit(&self) -> Option<Pit> {
        match *self {
            SowEvent::Pickup { pit, .. }
            | SowEvent::Place { pit, .. }
            | SowEvent::Capture { pit, .. } => Some(pit),
            SowEvent::Sweep { .. } => None,
        }
    }
}

/// Ordered events produced by a single move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SowingTrace {
    events: Vec<SowEvent>,
}

impl SowingTrace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: SowEvent) {
        self.events.push(event);
    }

    /// Events in the order they happened.
    pub fn events(&self) -> &[SowEvent] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the trace holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the events.
    pub fn iter(&self) -> std::slice::Iter<'_, SowEvent> {
        self.events.iter()
    }

    /// Pits that received a stone, in drop order.
    pub fn placements(&self) -> impl Iterator<Item = Pit> + '_ {
        self.events.iter().filter_map(|event| match event {
            SowEvent::Place { pit, .. } => Some(*pit),
            _ => None,
        })
    }

    /// Every capture with the pit it came from.
    pub fn captures(&self) -> impl Iterator<Item = (Pit, Capture)> + '_ {
        self.events
            .iter()
            .filter_map(|event| Some((event.pit()?, event.capture()?)))
    }

    /// Number of pickups; more than one means relay laps were sown.
    pub fn laps(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SowEvent::Pickup { .. }))
            .count()
    }
}

impl IntoIterator for SowingTrace {
    type Item = SowEvent;
    type IntoIter = std::vec::IntoIter<SowEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a SowingTrace {
    type Item = &'a SowEvent;
    type IntoIter = std::slice::Iter<'a, SowEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
