#![forbid(unsafe_code)]

//! Open/close controller.
//!
//! Owns the two booleans that gate every transition and the id of the
//! panel timeline currently in flight. It never talks to the engine
//! itself: the caller asks for a [`Decision`], plays (or fails to play) the
//! matching timeline, then reports back through [`Controller::begin`],
//! [`Controller::finish`] or [`Controller::abort`].
//!
//! # Drop policy
//!
//! - A close request always proceeds while the menu is open or opening.
//!   The in-flight open is killed and the close starts from the current
//!   offsets.
//! - An open request proceeds while closed or closing, unless `busy` is
//!   set. `busy` is raised by an open and lowered only when an open or a
//!   close completes, so re-opening during a close that interrupted an open
//!   is dropped.
//! - A dropped request changes nothing.

use std::fmt;

use stagger_core::TimelineId;

/// Direction of a panel transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Open,
    Close,
}

impl Direction {
    /// Whether this transition ends with the panel open.
    #[must_use]
    pub const fn opening(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Close => "close",
        })
    }
}

/// Why a request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Open requested while already open or opening.
    AlreadyOpen,
    /// Close requested while already closed or closing.
    AlreadyClosed,
    /// Open requested while an earlier open has not settled.
    Busy,
}

/// What the controller wants done with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Start(Direction),
    Ignore(IgnoreReason),
}

/// Open/busy state and in-flight bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    open: bool,
    busy: bool,
    active: Option<(Direction, TimelineId)>,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is open or opening.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether an open has started and no transition has completed since.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Panel transition in flight, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<Direction> {
        self.active.map(|(dir, _)| dir)
    }

    /// Timeline of the panel transition in flight, if any.
    #[must_use]
    pub fn active_timeline(&self) -> Option<TimelineId> {
        self.active.map(|(_, id)| id)
    }

    /// Decide a toggle: flip towards the opposite of the current target.
    #[must_use]
    pub fn decide_toggle(&self) -> Decision {
        if self.open {
            self.decide_close()
        } else {
            self.decide_open()
        }
    }

    /// Decide an explicit open request.
    #[must_use]
    pub fn decide_open(&self) -> Decision {
        if self.open {
            Decision::Ignore(IgnoreReason::AlreadyOpen)
        } else if self.busy {
            Decision::Ignore(IgnoreReason::Busy)
        } else {
            Decision::Start(Direction::Open)
        }
    }

    /// Decide an explicit close request.
    #[must_use]
    pub fn decide_close(&self) -> Decision {
        if self.open {
            Decision::Start(Direction::Close)
        } else {
            Decision::Ignore(IgnoreReason::AlreadyClosed)
        }
    }

    /// Record that a transition started.
    ///
    /// `timeline` is `None` when nothing could be played; a close then
    /// settles immediately. Returns the previously active timeline, which
    /// the caller must kill.
    pub fn begin(&mut self, direction: Direction, timeline: Option<TimelineId>) -> Option<TimelineId> {
        self.open = direction.opening();
        if direction == Direction::Open {
            self.busy = true;
        }
        let previous = self.active_timeline();
        self.active = timeline.map(|id| (direction, id));
        if timeline.is_none() && direction == Direction::Close {
            self.busy = false;
        }
        previous
    }

    /// Handle a completed timeline.
    ///
    /// Returns the direction that settled when `id` is the active panel
    /// timeline, else `None` (stale or foreign ids are ignored).
    pub fn finish(&mut self, id: TimelineId) -> Option<Direction> {
        match self.active {
            Some((direction, active)) if active == id => {
                self.active = None;
                self.busy = false;
                Some(direction)
            }
            _ => None,
        }
    }

    /// Revert to closed and idle after an open could not be played.
    pub fn abort(&mut self) {
        self.open = false;
        self.busy = false;
        self.active = None;
    }
}
