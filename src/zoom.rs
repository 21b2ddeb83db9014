//! Magnifier zoom control.
//!
//! The magnifier is a parallel feature with no shared state with the
//! measurement session. The camera exposes a normalized zoom in [0, 1];
//! users see a multiplicative factor where level 0 is 1x and level 1 is
//! [`MAX_ZOOM_FACTOR`]x. A slider sets the level directly; a pinch gesture
//! scales the factor multiplicatively from where the pinch started, which
//! keeps the motion feeling natural even when the gesture begins at 0.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::consts::MAX_ZOOM_FACTOR;

/// Normalized camera zoom plus an optional in-flight pinch gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomControl {
    level: f64,
    pinch_start: Option<f64>,
}

impl ZoomControl {
    /// Start at 1x with no gesture in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized zoom level in [0, 1].
    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Display factor: 1.0 at level 0, [`MAX_ZOOM_FACTOR`] at level 1.
    #[must_use]
    pub fn factor(&self) -> f64 {
        factor_for(self.level)
    }

    /// The factor formatted for the on-screen readout, e.g. `"1.0x"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.1}x", self.factor())
    }

    /// Set the level directly (slider input). Clamped to [0, 1].
    pub fn set_level(&mut self, level: f64) {
        self.level = level.clamp(0.0, 1.0);
    }

    /// Begin a pinch gesture, anchoring at the current level.
    pub fn begin_pinch(&mut self) {
        self.pinch_start = Some(self.level);
    }

    /// Update an in-flight pinch with the gesture's cumulative scale. The
    /// new factor is the anchored factor times `scale`, clamped back into
    /// the level range. No-op if no pinch has begun.
    pub fn update_pinch(&mut self, scale: f64) {
        let Some(start) = self.pinch_start else {
            return;
        };
        let new_factor = factor_for(start) * scale;
        self.level = ((new_factor - 1.0) / (MAX_ZOOM_FACTOR - 1.0)).clamp(0.0, 1.0);
    }

    /// Finish the pinch gesture, keeping the level where it landed.
    pub fn end_pinch(&mut self) {
        self.pinch_start = None;
    }
}

fn factor_for(level: f64) -> f64 {
    level.mul_add(MAX_ZOOM_FACTOR - 1.0, 1.0)
}
