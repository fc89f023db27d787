//! The two-pick selection state machine.
//!
//! Interactive insertion works by picking two boundary vertices; this module
//! models that flow as an explicit finite-state machine instead of a mode
//! string. The machine itself is pure: it validates picks through a
//! membership predicate supplied by the caller and reports when a pair is
//! ready, leaving the actual insertion to the engine.

use crate::core::vertex::VertexId;
use std::fmt;

/// State of the interactive add-vertex flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// No selection in progress.
    #[default]
    Idle,
    /// Waiting for the first boundary vertex pick.
    AwaitingFirst,
    /// First vertex recorded; waiting for the second pick.
    AwaitingSecond(VertexId),
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::AwaitingFirst => write!(f, "awaiting first vertex"),
            Self::AwaitingSecond(vp) => write!(f, "awaiting second vertex (first: {vp})"),
        }
    }
}

/// Result of feeding one pick event to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// The pick did not advance the flow (miss, invalid vertex, or idle).
    Ignored,
    /// The first endpoint was recorded.
    FirstRecorded(VertexId),
    /// Both endpoints are available; the machine has returned to idle.
    PairReady {
        /// First picked boundary vertex.
        vp: VertexId,
        /// Second picked boundary vertex, distinct from `vp`.
        vq: VertexId,
    },
}

/// The selection adapter: accumulates up to two picked boundary vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    state: SelectionState,
}

impl Selection {
    /// Current machine state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    /// Starts the add-vertex flow. Restarting while a flow is in progress
    /// discards any recorded pick.
    pub fn begin(&mut self) {
        self.state = SelectionState::AwaitingFirst;
    }

    /// Cancels the flow from any state, clearing the selection.
    pub fn cancel(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Feeds one vertex-pick event (`None` is a miss).
    ///
    /// `on_boundary` reports whether a vertex currently lies on the
    /// periphery; a first pick failing that check is ignored silently and
    /// the machine stays where it is. A second pick equal to the first is
    /// likewise ignored. When a valid pair is complete the machine returns
    /// [`PickOutcome::PairReady`] and resets to idle — whether the caller's
    /// insertion then succeeds or fails, the flow is over (no retry).
    pub fn on_pick<F>(&mut self, hit: Option<VertexId>, on_boundary: F) -> PickOutcome
    where
        F: Fn(VertexId) -> bool,
    {
        match (self.state, hit) {
            (SelectionState::AwaitingFirst, Some(v)) if on_boundary(v) => {
                self.state = SelectionState::AwaitingSecond(v);
                PickOutcome::FirstRecorded(v)
            }
            (SelectionState::AwaitingSecond(vp), Some(vq)) if vq != vp => {
                self.state = SelectionState::Idle;
                PickOutcome::PairReady { vp, vq }
            }
            _ => PickOutcome::Ignored,
        }
    }
}
