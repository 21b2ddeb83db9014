//! Geometry value types: world-space points, measured segments, and the
//! distance math behind measurement labels.
//!
//! Positions arrive from the AR runtime's hit-test and are validated once at
//! that boundary ([`Point3::from_hit`]); everything downstream may assume
//! finite coordinates.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// Error returned by [`Point3::from_hit`].
#[derive(Debug, thiserror::Error)]
pub enum HitError {
    /// A hit-test coordinate was NaN or infinite.
    #[error("non-finite hit coordinate on {axis} axis: {value}")]
    NonFinite {
        /// Which axis carried the bad value (`"x"`, `"y"`, or `"z"`).
        axis: &'static str,
        /// The offending coordinate.
        value: f64,
    },
}

/// A point in the AR world frame, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Validate a raw hit-test position.
    ///
    /// # Errors
    ///
    /// Returns [`HitError::NonFinite`] if any coordinate is NaN or infinite.
    /// Callers treat such a hit as "no surface" for that tick rather than
    /// letting the value reach the distance math.
    pub fn from_hit(raw: [f64; 3]) -> Result<Self, HitError> {
        let [x, y, z] = raw;
        for (axis, value) in [("x", x), ("y", y), ("z", z)] {
            if !value.is_finite() {
                return Err(HitError::NonFinite { axis, value });
            }
        }
        Ok(Self { x, y, z })
    }
}

/// A completed measurement between two placed points.
///
/// Segments are never edited after creation; the session only appends them
/// or removes the most recent one, so list position is their identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point3,
    pub end: Point3,
}

impl Segment {
    /// Length of this segment in meters.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Point halfway along this segment; anchor for the distance label.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        midpoint(self.start, self.end)
    }
}

/// Euclidean distance between two points, in meters.
#[must_use]
pub fn distance(a: Point3, b: Point3) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    dz.mul_add(dz, dx.mul_add(dx, dy * dy)).sqrt()
}

/// Componentwise average of two points.
#[must_use]
pub fn midpoint(a: Point3, b: Point3) -> Point3 {
    Point3 {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
        z: (a.z + b.z) / 2.0,
    }
}
