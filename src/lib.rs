//! Measurement engine for an AR tape-measure.
//!
//! This crate is the state layer between an AR runtime and a renderer. The
//! host feeds it a per-frame surface hit under the viewport reticle plus
//! three user signals (add point, clear, undo), and reads back a declarative
//! scene description: point markers, measured line segments, and billboard
//! distance labels. The crate performs no spatial sensing and no drawing —
//! the AR session and the 3D renderer are external collaborators.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::MeasureEngine`]: command reducer and transition reporting |
//! | [`session`] | [`session::MeasurementSession`]: completed segments, active point, cursor |
//! | [`signals`] | Host signal counters and edge detection into discrete commands |
//! | [`scene`] | Pure projection from session state to serializable draw commands |
//! | [`geom`] | 3D point/segment value types and distance math |
//! | [`units`] | Distance formatting for measurement labels |
//! | [`zoom`] | Magnifier zoom level: slider/pinch mapping to a display factor |
//! | [`consts`] | Shared numeric constants (marker sizes, zoom cap, etc.) |

pub mod consts;
pub mod engine;
pub mod geom;
pub mod scene;
pub mod session;
pub mod signals;
pub mod units;
pub mod zoom;
