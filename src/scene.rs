//! Scene projection: session state to declarative draw commands.
//!
//! This is the only layer the renderer sees. It takes a read-only view of
//! the session and produces data — it never mutates state and knows nothing
//! about how the commands are rasterized. The projection is recomputed from
//! scratch every frame; it carries no state of its own.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CURSOR_MARKER_OPACITY, CURSOR_MARKER_SIZE_M, LABEL_SCALE, LINE_THICKNESS_M,
    POINT_MARKER_OPACITY, POINT_MARKER_SIZE_M,
};
use crate::geom::{distance, midpoint, Point3};
use crate::session::MeasurementSession;
use crate::units::format_distance;

/// One drawing instruction for the host renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCommand {
    /// A small sphere marking a placed point or the live cursor.
    Marker {
        position: Point3,
        /// Sphere diameter in meters.
        size: f64,
        opacity: f64,
    },
    /// A straight line between two measurement points.
    Line {
        start: Point3,
        end: Point3,
        /// Line thickness in meters.
        thickness: f64,
    },
    /// A distance annotation. Rendered as a billboard: it always faces the
    /// viewer regardless of camera orientation.
    Label {
        text: String,
        position: Point3,
        scale: f64,
    },
}

/// Project the session into draw commands.
///
/// Emitted in layers: completed segments first (markers, line, label per
/// segment), then the in-progress segment from the active point to the
/// cursor, then the translucent cursor marker whenever a surface is
/// detected.
#[must_use]
pub fn project(session: &MeasurementSession) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    for segment in session.segments() {
        commands.push(point_marker(segment.start));
        commands.push(point_marker(segment.end));
        commands.push(DrawCommand::Line {
            start: segment.start,
            end: segment.end,
            thickness: LINE_THICKNESS_M,
        });
        commands.push(DrawCommand::Label {
            text: format_distance(segment.length()),
            position: segment.midpoint(),
            scale: LABEL_SCALE,
        });
    }

    if let (Some(start), Some(cursor)) = (session.active(), session.cursor()) {
        commands.push(point_marker(start));
        commands.push(DrawCommand::Line {
            start,
            end: cursor,
            thickness: LINE_THICKNESS_M,
        });
        commands.push(DrawCommand::Label {
            text: format_distance(distance(start, cursor)),
            position: midpoint(start, cursor),
            scale: LABEL_SCALE,
        });
    }

    if let Some(cursor) = session.cursor() {
        commands.push(DrawCommand::Marker {
            position: cursor,
            size: CURSOR_MARKER_SIZE_M,
            opacity: CURSOR_MARKER_OPACITY,
        });
    }

    commands
}

fn point_marker(position: Point3) -> DrawCommand {
    DrawCommand::Marker {
        position,
        size: POINT_MARKER_SIZE_M,
        opacity: POINT_MARKER_OPACITY,
    }
}
