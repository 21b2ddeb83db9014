//! Top-level measurement engine: the command reducer.
//!
//! `MeasureEngine` owns the session and the signal ledger. The host drives
//! it once per frame: set the cursor from this frame's hit-test, feed the
//! current signal counters, then read back the scene. Commands are applied
//! one at a time against the cursor value of that same tick, and every
//! command has a total, defined response — the engine never surfaces an
//! error to its caller.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, warn};

use crate::geom::{Point3, Segment};
use crate::scene::{self, DrawCommand};
use crate::session::MeasurementSession;
use crate::signals::{SignalLedger, Signals};

/// A discrete user action, one per tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the first point, or complete the segment with the second.
    AddPoint,
    /// Drop all measurements and any in-progress point.
    Clear,
    /// Cancel the in-progress point, or remove the latest segment.
    Undo,
}

/// What applying a command did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// A first point was placed; a measurement is now in progress.
    Started { at: Point3 },
    /// A second point completed this segment.
    Completed(Segment),
    /// The in-progress measurement was cancelled; history untouched.
    Cancelled { at: Point3 },
    /// The most recent segment was removed from history.
    Removed(Segment),
    /// History was emptied. `segments` is how many were dropped.
    Cleared { segments: usize },
    /// The command had no effect.
    Ignored(IgnoreReason),
}

/// Why a command was a no-op. None of these are errors to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Add point arrived with no surface under the reticle.
    NoSurface,
    /// Undo arrived while idle with no history to remove.
    EmptyHistory,
}

/// The measurement engine for one AR scene.
#[derive(Debug, Clone, Default)]
pub struct MeasureEngine {
    pub session: MeasurementSession,
    pub ledger: SignalLedger,
}

impl MeasureEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Cursor intake ---

    /// Record this frame's cursor position (`None` = no surface resolved).
    pub fn set_cursor(&mut self, cursor: Option<Point3>) {
        self.session.set_cursor(cursor);
    }

    /// Record this frame's raw hit-test result. A hit with a non-finite
    /// coordinate is discarded and treated as "no surface" for the tick, so
    /// malformed positions never reach the distance math.
    pub fn set_cursor_hit(&mut self, hit: Option<[f64; 3]>) {
        let cursor = match hit {
            None => None,
            Some(raw) => match Point3::from_hit(raw) {
                Ok(point) => Some(point),
                Err(err) => {
                    warn!(%err, "discarding malformed hit-test position");
                    None
                }
            },
        };
        self.session.set_cursor(cursor);
    }

    // --- Commands ---

    /// Observe the host's signal counters and apply whichever commands
    /// changed since the last observation, in order.
    pub fn observe(&mut self, signals: Signals) -> Vec<Transition> {
        self.ledger
            .observe(signals)
            .into_iter()
            .map(|command| self.apply(command))
            .collect()
    }

    /// Apply one command against the current cursor and session state.
    pub fn apply(&mut self, command: Command) -> Transition {
        let transition = match command {
            Command::AddPoint => self.add_point(),
            Command::Clear => Transition::Cleared { segments: self.session.clear() },
            Command::Undo => self.undo(),
        };
        debug!(?command, ?transition, "applied measurement command");
        transition
    }

    fn add_point(&mut self) -> Transition {
        // Points can only be placed or completed on a detected surface.
        let Some(cursor) = self.session.cursor() else {
            return Transition::Ignored(IgnoreReason::NoSurface);
        };

        if let Some(start) = self.session.take_active() {
            let segment = Segment { start, end: cursor };
            self.session.push_segment(segment);
            Transition::Completed(segment)
        } else {
            self.session.begin(cursor);
            Transition::Started { at: cursor }
        }
    }

    fn undo(&mut self) -> Transition {
        // Cancelling an in-progress point takes precedence over removing
        // history, so an accidental first tap never costs a prior segment.
        if let Some(at) = self.session.take_active() {
            Transition::Cancelled { at }
        } else if let Some(segment) = self.session.pop_segment() {
            Transition::Removed(segment)
        } else {
            Transition::Ignored(IgnoreReason::EmptyHistory)
        }
    }

    // --- Render ---

    /// The scene description for the current state.
    #[must_use]
    pub fn scene(&self) -> Vec<DrawCommand> {
        scene::project(&self.session)
    }
}
