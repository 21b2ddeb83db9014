//! Session aggregate: the measurement state owned by one AR scene.
//!
//! `MeasurementSession` holds the completed segments, the start point of an
//! in-progress measurement (if any), and the most recent cursor hit. It is
//! a plain store with tail-only history mutations; the rules for *when* each
//! mutation fires live in [`crate::engine`]. The session is created when the
//! AR scene activates and dropped when it tears down — nothing persists.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::geom::{Point3, Segment};

/// Measurement state for one AR scene activation.
#[derive(Debug, Clone, Default)]
pub struct MeasurementSession {
    segments: Vec<Segment>,
    active: Option<Point3>,
    cursor: Option<Point3>,
}

impl MeasurementSession {
    /// Create an empty session: no history, idle, no surface detected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// Completed segments in creation order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Start point of the in-progress measurement, if one is underway.
    #[must_use]
    pub fn active(&self) -> Option<Point3> {
        self.active
    }

    /// Latest surface hit under the reticle, if a surface is detected.
    #[must_use]
    pub fn cursor(&self) -> Option<Point3> {
        self.cursor
    }

    /// Whether a first point has been placed and awaits its second tap.
    #[must_use]
    pub fn is_measuring(&self) -> bool {
        self.active.is_some()
    }

    /// Number of completed segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if no segments have been completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    // --- Mutations ---

    /// Record the latest cursor hit (`None` = no surface this frame).
    /// Touches nothing else.
    pub fn set_cursor(&mut self, cursor: Option<Point3>) {
        self.cursor = cursor;
    }

    /// Begin measuring from `start`. Replaces any previous active point.
    pub fn begin(&mut self, start: Point3) {
        self.active = Some(start);
    }

    /// Take the active point, returning to the idle state.
    pub fn take_active(&mut self) -> Option<Point3> {
        self.active.take()
    }

    /// Append a completed segment at the tail of history.
    pub fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Remove and return the most recent segment, if any.
    pub fn pop_segment(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Drop all history and any in-progress measurement, returning the
    /// number of segments removed. The cursor is left untouched.
    pub fn clear(&mut self) -> usize {
        self.active = None;
        let removed = self.segments.len();
        self.segments.clear();
        removed
    }
}
