//! Shared numeric constants for the measurement scene and magnifier.

// ── Scene geometry ──────────────────────────────────────────────

/// Diameter of a placed measurement point marker, in meters.
pub const POINT_MARKER_SIZE_M: f64 = 0.02;

/// Diameter of the surface-detection cursor marker, in meters.
pub const CURSOR_MARKER_SIZE_M: f64 = 0.01;

/// Opacity of a placed point marker.
pub const POINT_MARKER_OPACITY: f64 = 1.0;

/// Opacity of the cursor marker; translucent so it reads as a hint.
pub const CURSOR_MARKER_OPACITY: f64 = 0.5;

/// Thickness of a measurement line, in meters.
pub const LINE_THICKNESS_M: f64 = 0.005;

/// Uniform scale applied to billboard distance labels.
pub const LABEL_SCALE: f64 = 0.1;

// ── Magnifier ───────────────────────────────────────────────────

/// Display factor at the top of the zoom range (level 1.0 = 5x).
pub const MAX_ZOOM_FACTOR: f64 = 5.0;
