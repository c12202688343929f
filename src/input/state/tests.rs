use super::*;
use crate::draw::{PathCommand, RenderStyle, StrokeState};
use crate::input::{ControlEvent, GestureEvent, Tool};

fn create_test_session() -> DrawingSession {
    DrawingSession::default()
}

fn draw_square_stroke(session: &mut DrawingSession) {
    session.on_pan_start(10.0, 10.0);
    session.on_pan_move(20.0, 10.0);
    session.on_pan_move(20.0, 20.0);
    session.on_pan_end();
}

#[test]
fn test_defaults() {
    let session = create_test_session();
    assert_eq!(session.active_tool(), Tool::Pencil);
    assert_eq!(session.active_color_index(), 0);
    assert_eq!(session.active_color(), "red");
    assert!(!session.is_palette_open());
    assert!(session.render_snapshot().is_empty());
    assert_eq!(session.palette(), DEFAULT_PALETTE);
}

#[test]
fn test_pencil_stroke_scenario() {
    let mut session = create_test_session();
    draw_square_stroke(&mut session);

    let snapshot = session.render_snapshot();
    assert_eq!(snapshot.strokes.len(), 1);
    let stroke = &snapshot.strokes[0];
    let commands: Vec<String> = stroke.commands.iter().map(ToString::to_string).collect();
    assert_eq!(commands, ["M 10 10", "L 20 10", "L 20 20"]);
    assert!(stroke.ended);
    assert_eq!(stroke.color, "red");
    assert_eq!(stroke.path_data(), "M 10 10 L 20 10 L 20 20");
}

#[test]
fn test_stamp_scenario() {
    let mut session = create_test_session();
    session.set_tool(Tool::Stamp);
    session.select_palette_color(2).unwrap();
    session.on_tap(100.0, 100.0);

    let snapshot = session.render_snapshot();
    assert_eq!(snapshot.stamps.len(), 1);
    let stamp = &snapshot.stamps[0];
    assert_eq!((stamp.x, stamp.y), (75.0, 75.0));
    assert_eq!(stamp.color, "blue");
}

#[test]
fn test_pan_end_without_strokes_is_noop() {
    let mut session = create_test_session();
    session.take_redraw();
    session.on_pan_end();
    assert!(session.render_snapshot().strokes.is_empty());
    assert!(!session.needs_redraw());
}

#[test]
fn test_pan_move_without_strokes_is_noop() {
    let mut session = create_test_session();
    session.on_pan_move(5.0, 5.0);
    assert!(session.render_snapshot().strokes.is_empty());
}

#[test]
fn test_clear_after_scenarios() {
    let mut session = create_test_session();
    draw_square_stroke(&mut session);
    session.set_tool(Tool::Stamp);
    session.select_palette_color(2).unwrap();
    session.on_tap(100.0, 100.0);
    session.toggle_palette();

    session.clear();
    let snapshot = session.render_snapshot();
    assert!(snapshot.strokes.is_empty());
    assert!(snapshot.stamps.is_empty());
    assert!(snapshot.circles.is_empty());

    // Tool and palette state survive a clear.
    assert_eq!(session.active_tool(), Tool::Stamp);
    assert_eq!(session.active_color_index(), 2);
    assert!(session.is_palette_open());

    session.clear();
    assert!(session.render_snapshot().is_empty());
}

#[test]
fn test_point_count_matches_move_events() {
    let mut session = create_test_session();
    for moves in [0usize, 1, 7] {
        session.on_pan_start(0.0, 0.0);
        for i in 0..moves {
            session.on_pan_move(i as f64, i as f64 * 2.0);
        }
        session.on_pan_end();
        let stroke = session.render_snapshot().strokes.last().cloned().unwrap();
        assert_eq!(stroke.point_count(), 1 + moves);
        assert_eq!(stroke.state(), StrokeState::Ended);
    }
    assert_eq!(session.render_snapshot().strokes.len(), 3);
}

#[test]
fn test_moves_after_end_are_ignored() {
    let mut session = create_test_session();
    draw_square_stroke(&mut session);
    session.on_pan_move(99.0, 99.0);
    session.on_pan_end();

    let stroke = &session.render_snapshot().strokes[0];
    assert_eq!(stroke.point_count(), 3);
    assert_eq!(stroke.commands.last(), Some(&PathCommand::LineTo { x: 20.0, y: 20.0 }));
}

#[test]
fn test_only_latest_stroke_is_active() {
    let mut session = create_test_session();
    session.on_pan_start(0.0, 0.0);
    session.on_pan_move(5.0, 5.0);
    // Second start without an end closes the first stroke
    session.on_pan_start(50.0, 50.0);
    session.on_pan_move(60.0, 60.0);

    let strokes = session.render_snapshot().strokes;
    assert_eq!(strokes[0].state(), StrokeState::Ended);
    assert!(!strokes[0].is_active());
    assert!(strokes[1].is_active());
    assert_eq!(strokes.iter().filter(|s| s.is_active()).count(), 1);
    assert_eq!(strokes[0].point_count(), 2);
    assert_eq!(strokes[1].point_count(), 2);
}

#[test]
fn test_pan_start_keeps_ended_stroke_untouched() {
    let mut session = create_test_session();
    draw_square_stroke(&mut session);
    session.take_redraw();
    session.on_pan_start(30.0, 30.0);

    let strokes = session.render_snapshot().strokes;
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].path_data(), "M 10 10 L 20 10 L 20 20");
    assert_eq!(strokes[0].state(), StrokeState::Ended);
    assert_eq!(strokes.iter().filter(|s| s.is_active()).count(), 1);
}

#[test]
fn test_tap_ignored_with_pencil() {
    let mut session = create_test_session();
    session.on_tap(10.0, 10.0);
    assert!(session.render_snapshot().stamps.is_empty());
}

#[test]
fn test_pan_ignored_with_stamp() {
    let mut session = create_test_session();
    session.set_tool(Tool::Stamp);
    session.on_pan_start(1.0, 1.0);
    session.on_pan_move(2.0, 2.0);
    session.on_pan_end();
    assert!(session.render_snapshot().strokes.is_empty());
}

#[test]
fn test_stamp_offsets_use_half_stamp_size() {
    let mut session = create_test_session().with_style(RenderStyle {
        stamp_size: 80.0,
        ..RenderStyle::default()
    });
    session.set_tool(Tool::Stamp);
    session.on_tap(-10.0, 500.0);
    let stamp = &session.render_snapshot().stamps[0];
    assert_eq!((stamp.x, stamp.y), (-50.0, 460.0));
}

#[test]
fn test_switching_tool_keeps_recorded_objects() {
    let mut session = create_test_session();
    draw_square_stroke(&mut session);
    session.select_palette_color(1).unwrap();
    session.toggle_tool();
    session.on_tap(30.0, 30.0);
    let before = session.frame().clone();

    session.select_palette_color(3).unwrap();
    session.toggle_tool();
    session.toggle_tool();

    assert_eq!(session.frame(), &before);
    assert_eq!(before.strokes[0].color, "red");
    assert_eq!(before.stamps[0].color, "green");
}

#[test]
fn test_select_color_out_of_range_rejected() {
    let mut session = create_test_session();
    session.select_palette_color(1).unwrap();
    session.toggle_palette();

    let err = session.select_palette_color(4).unwrap_err();
    assert_eq!(err, SessionError::ColorIndexOutOfRange { index: 4, len: 4 });
    assert_eq!(session.active_color_index(), 1);
    assert!(session.is_palette_open());
}

#[test]
fn test_select_color_closes_palette() {
    let mut session = create_test_session();
    session.toggle_palette();
    assert!(session.is_palette_open());
    session.select_palette_color(3).unwrap();
    assert!(!session.is_palette_open());
    assert_eq!(session.active_color(), "yellow");
}

#[test]
fn test_toggle_palette_flips() {
    let mut session = create_test_session();
    session.toggle_palette();
    session.toggle_palette();
    assert!(!session.is_palette_open());
}

#[test]
fn test_strokes_use_color_at_start_time() {
    let mut session = create_test_session();
    session.on_pan_start(0.0, 0.0);
    session.select_palette_color(2).unwrap();
    session.on_pan_move(1.0, 1.0);
    session.on_pan_end();
    assert_eq!(session.render_snapshot().strokes[0].color, "red");
}

#[test]
fn test_handle_events_dispatch() {
    let mut session = create_test_session();
    session
        .handle_control(ControlEvent::SelectColor(1))
        .unwrap();
    session.handle_gesture(GestureEvent::PanStart { x: 1.0, y: 2.0 });
    session.handle_gesture(GestureEvent::PanMove { x: 3.0, y: 4.0 });
    session.handle_gesture(GestureEvent::PanEnd);
    session.handle_control(ControlEvent::SetTool(Tool::Stamp)).unwrap();
    session.handle_gesture(GestureEvent::Tap { x: 25.0, y: 25.0 });

    assert!(session.handle_control(ControlEvent::SelectColor(9)).is_err());

    let snapshot = session.render_snapshot();
    assert_eq!(snapshot.strokes[0].path_data(), "M 1 2 L 3 4");
    assert_eq!(snapshot.strokes[0].color, "green");
    assert_eq!((snapshot.stamps[0].x, snapshot.stamps[0].y), (0.0, 0.0));

    session.handle_control(ControlEvent::Clear).unwrap();
    assert!(session.render_snapshot().is_empty());
}

#[test]
fn test_redraw_flag_tracks_mutations() {
    let mut session = create_test_session();
    assert!(session.take_redraw());
    assert!(!session.take_redraw());

    session.on_tap(1.0, 1.0); // pencil: no-op
    assert!(!session.needs_redraw());

    session.on_pan_start(1.0, 1.0);
    assert!(session.take_redraw());

    session.set_tool(Tool::Pencil); // unchanged
    assert!(!session.needs_redraw());
}

#[test]
fn test_custom_palette() {
    let session = DrawingSession::new(["#123456", "purple"]).unwrap();
    assert_eq!(session.active_color(), "#123456");
    assert_eq!(
        DrawingSession::new(Vec::<String>::new()).unwrap_err(),
        SessionError::EmptyPalette
    );
}
