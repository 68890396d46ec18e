use doodle_canvas::{CanvasConfig, CanvasSurface, Command, RasterSnapshot};
use egui::{Color32, Pos2};

// Helper to create a blank 64x64 canvas with default settings
fn create_test_canvas() -> CanvasSurface {
    CanvasSurface::new(64, 64, &CanvasConfig::default())
}

fn draw_stroke(canvas: &mut CanvasSurface, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().unwrap();
    canvas.pointer_down(Pos2::new(first.0, first.1));
    for (x, y) in rest {
        canvas.pointer_move(Pos2::new(*x, *y));
    }
    canvas.pointer_up();
}

fn is_blank(snapshot: &RasterSnapshot) -> bool {
    snapshot.pixels().chunks_exact(4).all(|p| p == [255, 255, 255, 255])
}

#[test]
fn test_stroke_paints_selected_color() {
    let mut canvas = create_test_canvas();
    canvas.set_color(Color32::RED);
    draw_stroke(&mut canvas, &[(10.0, 10.0), (50.0, 50.0)]);

    assert_eq!(canvas.surface().pixel(30, 30), Some(Color32::RED));
    assert!(!canvas.is_drawing());
    assert_eq!(canvas.history().undo_len(), 1);
}

#[test]
fn test_pointer_down_alone_paints_nothing() {
    let mut canvas = create_test_canvas();
    canvas.pointer_down(Pos2::new(20.0, 20.0));
    assert!(canvas.is_drawing());
    assert!(is_blank(&canvas.surface().snapshot()));
    canvas.pointer_up();
    assert!(!canvas.is_drawing());
}

#[test]
fn test_second_pointer_down_does_not_restart_stroke() {
    let mut canvas = create_test_canvas();
    canvas.pointer_down(Pos2::new(5.0, 5.0));
    canvas.pointer_down(Pos2::new(40.0, 40.0));
    assert_eq!(canvas.history().undo_len(), 1);

    // The path continues from the first point
    canvas.pointer_move(Pos2::new(5.0, 40.0));
    assert_eq!(canvas.surface().pixel(5, 20), Some(Color32::BLACK));
}

#[test]
fn test_move_without_active_stroke_is_ignored() {
    let mut canvas = create_test_canvas();
    let before = canvas.surface().snapshot();
    canvas.pointer_move(Pos2::new(10.0, 10.0));
    canvas.pointer_up();
    assert_eq!(canvas.surface().snapshot(), before);
    assert!(!canvas.can_undo());
}

#[test]
fn test_n_strokes_then_n_undos_restores_start() {
    let mut canvas = create_test_canvas();
    let start = canvas.surface().snapshot();

    let strokes: [&[(f32, f32)]; 3] = [
        &[(1.0, 1.0), (60.0, 1.0)],
        &[(5.0, 5.0), (5.0, 60.0), (40.0, 60.0)],
        &[(0.0, 63.0), (63.0, 0.0)],
    ];
    let colors = [Color32::RED, Color32::GREEN, Color32::BLUE];
    for (stroke, color) in strokes.iter().zip(colors) {
        canvas.set_color(color);
        draw_stroke(&mut canvas, stroke);
    }
    assert_ne!(canvas.surface().snapshot(), start);

    for _ in 0..strokes.len() {
        assert_eq!(canvas.undo(), Ok(true));
    }
    assert_eq!(canvas.surface().snapshot(), start);
    assert!(!canvas.can_undo());
    assert_eq!(canvas.history().redo_len(), 3);
}

#[test]
fn test_undo_then_redo_is_identity() {
    let mut canvas = create_test_canvas();
    draw_stroke(&mut canvas, &[(10.0, 10.0), (30.0, 50.0)]);
    draw_stroke(&mut canvas, &[(50.0, 10.0), (10.0, 50.0)]);
    let drawn = canvas.surface().snapshot();

    assert_eq!(canvas.undo(), Ok(true));
    assert_ne!(canvas.surface().snapshot(), drawn);
    assert_eq!(canvas.redo(), Ok(true));
    assert_eq!(canvas.surface().snapshot(), drawn);
    assert_eq!(canvas.history().undo_len(), 2);
    assert_eq!(canvas.history().redo_len(), 0);
}

#[test]
fn test_undo_on_empty_stack_changes_nothing() {
    let mut canvas = create_test_canvas();
    let before = canvas.surface().snapshot();
    let revision = canvas.revision();

    assert_eq!(canvas.undo(), Ok(false));
    assert_eq!(canvas.surface().snapshot(), before);
    assert_eq!(canvas.history().undo_len(), 0);
    assert_eq!(canvas.history().redo_len(), 0);
    assert_eq!(canvas.revision(), revision);
}

#[test]
fn test_redo_on_empty_stack_changes_nothing() {
    let mut canvas = create_test_canvas();
    draw_stroke(&mut canvas, &[(10.0, 10.0), (20.0, 20.0)]);
    let before = canvas.surface().snapshot();

    assert_eq!(canvas.redo(), Ok(false));
    assert_eq!(canvas.surface().snapshot(), before);
    assert_eq!(canvas.history().undo_len(), 1);
    assert_eq!(canvas.history().redo_len(), 0);
}

#[test]
fn test_clear_then_undo_restores_drawing() {
    let mut canvas = create_test_canvas();
    canvas.set_color(Color32::BLACK);
    draw_stroke(&mut canvas, &[(10.0, 10.0), (50.0, 50.0)]);
    let drawn = canvas.surface().snapshot();

    Command::Clear.execute(&mut canvas);
    assert!(is_blank(&canvas.surface().snapshot()));

    Command::Undo.execute(&mut canvas);
    assert_eq!(canvas.surface().snapshot(), drawn);
    assert_eq!(canvas.surface().pixel(30, 30), Some(Color32::BLACK));
}

#[test]
fn test_resize_mid_stroke_discards_stroke_and_history() {
    let mut canvas = create_test_canvas();
    draw_stroke(&mut canvas, &[(10.0, 10.0), (50.0, 50.0)]);
    canvas.pointer_down(Pos2::new(5.0, 5.0));
    canvas.pointer_move(Pos2::new(20.0, 5.0));
    assert!(canvas.is_drawing());

    Command::Resize {
        width: 80,
        height: 40,
    }
    .execute(&mut canvas);

    assert!(!canvas.is_drawing());
    assert_eq!(canvas.dimensions(), (80, 40));
    assert!(is_blank(&canvas.surface().snapshot()));
    assert!(!canvas.can_undo());
    assert!(!canvas.can_redo());

    // Further moves belong to no stroke
    canvas.pointer_move(Pos2::new(30.0, 30.0));
    assert!(is_blank(&canvas.surface().snapshot()));
}

#[test]
fn test_resize_to_same_dimensions_keeps_drawing() {
    let mut canvas = create_test_canvas();
    draw_stroke(&mut canvas, &[(10.0, 10.0), (50.0, 50.0)]);
    let drawn = canvas.surface().snapshot();

    canvas.resize(64, 64);
    assert_eq!(canvas.surface().snapshot(), drawn);
    assert!(canvas.can_undo());
}

#[test]
fn test_new_stroke_after_undo_clears_redo_by_default() {
    let mut canvas = create_test_canvas();
    draw_stroke(&mut canvas, &[(10.0, 10.0), (50.0, 10.0)]);
    canvas.undo().unwrap();
    assert!(canvas.can_redo());

    draw_stroke(&mut canvas, &[(10.0, 30.0), (50.0, 30.0)]);
    assert!(!canvas.can_redo());
}

#[test]
fn test_retain_policy_keeps_redo_after_new_stroke() {
    let config = CanvasConfig {
        redo_policy: doodle_canvas::RedoPolicy::Retain,
        ..Default::default()
    };
    let mut canvas = CanvasSurface::new(64, 64, &config);
    draw_stroke(&mut canvas, &[(10.0, 10.0), (50.0, 10.0)]);
    canvas.undo().unwrap();

    draw_stroke(&mut canvas, &[(10.0, 30.0), (50.0, 30.0)]);
    assert!(canvas.can_redo());
}

#[test]
fn test_color_change_applies_to_next_stroke_only() {
    let mut canvas = create_test_canvas();
    canvas.set_color(Color32::BLUE);
    canvas.pointer_down(Pos2::new(10.0, 10.0));
    Command::SetColor(Color32::RED).execute(&mut canvas);
    canvas.pointer_move(Pos2::new(50.0, 10.0));
    canvas.pointer_up();
    assert_eq!(canvas.surface().pixel(30, 10), Some(Color32::BLUE));

    draw_stroke(&mut canvas, &[(10.0, 40.0), (50.0, 40.0)]);
    assert_eq!(canvas.surface().pixel(30, 40), Some(Color32::RED));
}

#[test]
fn test_stroke_width_is_clamped() {
    let mut canvas = create_test_canvas();
    Command::SetStrokeWidth(0.0).execute(&mut canvas);
    assert_eq!(canvas.stroke_width(), 1.0);
    Command::SetStrokeWidth(1000.0).execute(&mut canvas);
    assert_eq!(canvas.stroke_width(), 50.0);
}
