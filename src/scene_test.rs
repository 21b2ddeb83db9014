#![allow(clippy::float_cmp)]

use super::*;

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn session_with_segment(ax: f64, bx: f64) -> MeasurementSession {
    let mut session = MeasurementSession::new();
    session.push_segment(crate::geom::Segment {
        start: p(ax, 0.0, 0.0),
        end: p(bx, 0.0, 0.0),
    });
    session
}

fn markers(commands: &[DrawCommand]) -> Vec<&DrawCommand> {
    commands.iter().filter(|c| matches!(c, DrawCommand::Marker { .. })).collect()
}

fn lines(commands: &[DrawCommand]) -> Vec<&DrawCommand> {
    commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).collect()
}

fn labels(commands: &[DrawCommand]) -> Vec<&DrawCommand> {
    commands.iter().filter(|c| matches!(c, DrawCommand::Label { .. })).collect()
}

// =============================================================
// Empty session
// =============================================================

#[test]
fn empty_session_without_cursor_draws_nothing() {
    let session = MeasurementSession::new();
    assert!(project(&session).is_empty());
}

#[test]
fn cursor_alone_draws_only_the_translucent_marker() {
    let mut session = MeasurementSession::new();
    session.set_cursor(Some(p(1.0, 2.0, 3.0)));

    let commands = project(&session);
    assert_eq!(
        commands,
        vec![DrawCommand::Marker {
            position: p(1.0, 2.0, 3.0),
            size: CURSOR_MARKER_SIZE_M,
            opacity: CURSOR_MARKER_OPACITY,
        }]
    );
}

// =============================================================
// Completed segments
// =============================================================

#[test]
fn segment_emits_two_markers_a_line_and_a_label() {
    let session = session_with_segment(0.0, 1.0);
    let commands = project(&session);

    assert_eq!(markers(&commands).len(), 2);
    assert_eq!(lines(&commands).len(), 1);
    assert_eq!(labels(&commands).len(), 1);
}

#[test]
fn segment_label_sits_at_the_midpoint_with_formatted_distance() {
    let session = session_with_segment(0.0, 1.0);
    let commands = project(&session);

    let label = labels(&commands)[0];
    match label {
        DrawCommand::Label { text, position, scale } => {
            assert_eq!(text, "1.00 m");
            assert_eq!(*position, p(0.5, 0.0, 0.0));
            assert_eq!(*scale, LABEL_SCALE);
        }
        other => panic!("expected a label, got {other:?}"),
    }
}

#[test]
fn segment_line_uses_standard_thickness() {
    let session = session_with_segment(0.0, 2.0);
    let commands = project(&session);

    match lines(&commands)[0] {
        DrawCommand::Line { start, end, thickness } => {
            assert_eq!(*start, p(0.0, 0.0, 0.0));
            assert_eq!(*end, p(2.0, 0.0, 0.0));
            assert_eq!(*thickness, LINE_THICKNESS_M);
        }
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn placed_markers_are_full_opacity() {
    let session = session_with_segment(0.0, 1.0);
    let commands = project(&session);

    for marker in markers(&commands) {
        match marker {
            DrawCommand::Marker { size, opacity, .. } => {
                assert_eq!(*size, POINT_MARKER_SIZE_M);
                assert_eq!(*opacity, POINT_MARKER_OPACITY);
            }
            other => panic!("expected a marker, got {other:?}"),
        }
    }
}

#[test]
fn multiple_segments_project_in_creation_order() {
    let mut session = session_with_segment(0.0, 1.0);
    session.push_segment(crate::geom::Segment {
        start: p(5.0, 0.0, 0.0),
        end: p(6.0, 0.0, 0.0),
    });

    let commands = project(&session);
    assert_eq!(labels(&commands).len(), 2);

    // The first label belongs to the first segment.
    match labels(&commands)[0] {
        DrawCommand::Label { position, .. } => assert_eq!(*position, p(0.5, 0.0, 0.0)),
        other => panic!("expected a label, got {other:?}"),
    }
}

// =============================================================
// In-progress segment
// =============================================================

#[test]
fn measuring_with_cursor_draws_the_live_segment() {
    let mut session = MeasurementSession::new();
    session.begin(p(0.0, 0.0, 0.0));
    session.set_cursor(Some(p(0.5, 0.0, 0.0)));

    let commands = project(&session);
    // Active point marker + live line + live label + cursor marker.
    assert_eq!(markers(&commands).len(), 2);
    assert_eq!(lines(&commands).len(), 1);
    assert_eq!(labels(&commands).len(), 1);

    match labels(&commands)[0] {
        DrawCommand::Label { text, position, .. } => {
            assert_eq!(text, "50 cm");
            assert_eq!(*position, p(0.25, 0.0, 0.0));
        }
        other => panic!("expected a label, got {other:?}"),
    }
}

#[test]
fn measuring_without_cursor_draws_no_live_segment() {
    let mut session = MeasurementSession::new();
    session.begin(p(0.0, 0.0, 0.0));

    // No surface detected: no ghost line, no cursor marker.
    assert!(project(&session).is_empty());
}

#[test]
fn live_label_tracks_the_cursor() {
    let mut session = MeasurementSession::new();
    session.begin(p(0.0, 0.0, 0.0));
    session.set_cursor(Some(p(3.0, 0.0, 0.0)));

    let commands = project(&session);
    assert!(commands.iter().any(|cmd| matches!(
        cmd,
        DrawCommand::Label { text, .. } if text == "3.00 m"
    )));
}

// =============================================================
// Cursor marker layering
// =============================================================

#[test]
fn cursor_marker_is_always_last() {
    let mut session = session_with_segment(0.0, 1.0);
    session.set_cursor(Some(p(9.0, 0.0, 0.0)));

    let commands = project(&session);
    match commands.last() {
        Some(DrawCommand::Marker { position, size, opacity }) => {
            assert_eq!(*position, p(9.0, 0.0, 0.0));
            assert_eq!(*size, CURSOR_MARKER_SIZE_M);
            assert_eq!(*opacity, CURSOR_MARKER_OPACITY);
        }
        other => panic!("expected the cursor marker last, got {other:?}"),
    }
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn draw_commands_serialize_with_lowercase_kind_tags() {
    let marker = DrawCommand::Marker { position: p(0.0, 0.0, 0.0), size: 0.02, opacity: 1.0 };
    let json = serde_json::to_value(&marker).unwrap();
    assert_eq!(json["kind"], "marker");

    let label = DrawCommand::Label { text: "1 cm".to_owned(), position: p(0.0, 0.0, 0.0), scale: 0.1 };
    let json = serde_json::to_value(&label).unwrap();
    assert_eq!(json["kind"], "label");
    assert_eq!(json["text"], "1 cm");
}

#[test]
fn draw_commands_round_trip_through_json() {
    let line = DrawCommand::Line {
        start: p(0.0, 0.0, 0.0),
        end: p(1.0, 2.0, 3.0),
        thickness: LINE_THICKNESS_M,
    };
    let json = serde_json::to_string(&line).unwrap();
    let back: DrawCommand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, line);
}
